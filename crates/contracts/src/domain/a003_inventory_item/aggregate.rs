use serde::{Deserialize, Serialize};

use crate::shared::lenient;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор позиции склада
    InventoryItemId
);

/// Позиция склада (ингредиент, упаковка и т.п.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient::number")]
    pub current_stock: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub reorder_point: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub cost_per_unit: f64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: String,
}

impl InventoryItem {
    /// Стоимость остатка; некорректные значения дают 0
    pub fn stock_value(&self) -> f64 {
        let value = self.current_stock * self.cost_per_unit;
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
}

/// Тело запроса PUT /api/inventory/:id/stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockDto {
    pub current_stock: f64,
}

impl UpdateStockDto {
    pub fn validate(&self) -> Result<(), String> {
        if !self.current_stock.is_finite() {
            return Err("Stock must be a number".into());
        }
        if self.current_stock < 0.0 {
            return Err("Stock cannot be negative".into());
        }
        Ok(())
    }
}
