//! Уровень остатка на складе: нет / мало / достаточно

use super::aggregate::InventoryItem;
use crate::shared::money::sum_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    Out,
    Low,
    Good,
}

impl StockStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::Out => "Out of stock",
            StockStatus::Low => "Low stock",
            StockStatus::Good => "In stock",
        }
    }
}

/// `≤ 0` даёт Out, `≤ reorder_point` даёт Low, иначе Good.
///
/// NaN в остатке даёт `Out`; NaN в точке заказа считается нулём.
pub fn classify_stock(current_stock: f64, reorder_point: f64) -> StockStatus {
    if current_stock.is_nan() || current_stock <= 0.0 {
        return StockStatus::Out;
    }
    let reorder_point = if reorder_point.is_nan() { 0.0 } else { reorder_point };
    if current_stock <= reorder_point {
        StockStatus::Low
    } else {
        StockStatus::Good
    }
}

impl InventoryItem {
    pub fn stock_status(&self) -> StockStatus {
        classify_stock(self.current_stock, self.reorder_point)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventorySummary {
    pub total: usize,
    pub out: usize,
    pub low: usize,
    pub good: usize,
    pub total_value: f64,
}

pub fn summarize_inventory(items: &[InventoryItem]) -> InventorySummary {
    let mut summary = InventorySummary {
        total: items.len(),
        total_value: sum_money(items.iter().map(InventoryItem::stock_value)),
        ..Default::default()
    };
    for item in items {
        match item.stock_status() {
            StockStatus::Out => summary.out += 1,
            StockStatus::Low => summary.low += 1,
            StockStatus::Good => summary.good += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_inventory_item::aggregate::InventoryItemId;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_stock(5.0, 5.0), StockStatus::Low);
        assert_eq!(classify_stock(6.0, 5.0), StockStatus::Good);
        assert_eq!(classify_stock(0.0, 5.0), StockStatus::Out);
        assert_eq!(classify_stock(0.5, 0.0), StockStatus::Good);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(classify_stock(-2.0, 5.0), StockStatus::Out);
        assert_eq!(classify_stock(f64::NAN, 5.0), StockStatus::Out);
        assert_eq!(classify_stock(3.0, f64::NAN), StockStatus::Good);
        assert_eq!(classify_stock(3.0, -1.0), StockStatus::Good);
    }

    #[test]
    fn test_summarize_inventory() {
        let item = |stock: f64, reorder: f64, cost: f64| InventoryItem {
            id: InventoryItemId::new_v4(),
            name: String::new(),
            category: String::new(),
            current_stock: stock,
            reorder_point: reorder,
            cost_per_unit: cost,
            unit: "pcs".into(),
        };
        let items = vec![
            item(0.0, 2.0, 3.0),
            item(2.0, 2.0, 0.35),
            item(10.0, 2.0, 1.1),
        ];
        let summary = summarize_inventory(&items);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.out, 1);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.good, 1);
        assert_eq!(summary.total_value, 11.7);
    }
}
