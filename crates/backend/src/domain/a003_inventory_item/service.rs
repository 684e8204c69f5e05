use super::repository;
use contracts::domain::a003_inventory_item::aggregate::{
    InventoryItem, InventoryItemId, UpdateStockDto,
};
use contracts::domain::a003_inventory_item::stock::StockStatus;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InventoryServiceError {
    #[error("inventory item {0} not found")]
    NotFound(Uuid),
    #[error("invalid stock value: {0}")]
    Invalid(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub async fn list_all() -> anyhow::Result<Vec<InventoryItem>> {
    repository::list_all().await
}

/// Установка фактического остатка после пересчёта или поставки
pub async fn update_stock(
    id: Uuid,
    dto: UpdateStockDto,
) -> Result<InventoryItem, InventoryServiceError> {
    dto.validate().map_err(InventoryServiceError::Invalid)?;

    let mut item = repository::get_by_id(id)
        .await?
        .ok_or(InventoryServiceError::NotFound(id))?;

    if !repository::update_stock(id, dto.current_stock).await? {
        return Err(InventoryServiceError::NotFound(id));
    }
    item.current_stock = dto.current_stock;

    if item.stock_status() != StockStatus::Good {
        tracing::warn!(
            "Inventory '{}' is {} ({} {})",
            item.name,
            item.stock_status().display_name(),
            item.current_stock,
            item.unit
        );
    }
    Ok(item)
}

/// Вставка тестовых позиций склада
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("Mozzarella", "Dairy", 12.0, 5.0, 7.8, "kg"),
        ("Heavy Cream", "Dairy", 2.0, 4.0, 3.2, "l"),
        ("Burger Buns", "Bakery", 0.0, 24.0, 0.45, "pcs"),
        ("Ribeye", "Meat", 6.0, 6.0, 21.0, "kg"),
        ("Chicken Breast", "Meat", 18.5, 8.0, 6.9, "kg"),
        ("Romaine Lettuce", "Produce", 9.0, 4.0, 1.6, "head"),
        ("Takeout Boxes", "Packaging", 340.0, 100.0, 0.12, "pcs"),
    ];

    for (name, category, stock, reorder, cost, unit) in data {
        let item = InventoryItem {
            id: InventoryItemId::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            current_stock: stock,
            reorder_point: reorder,
            cost_per_unit: cost,
            unit: unit.to_string(),
        };
        repository::insert(&item).await?;
    }

    tracing::info!("Inserted demo inventory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_stock_is_rejected_before_storage() {
        // Валидация срабатывает до обращения к БД, соединение не нужно
        let result = update_stock(Uuid::new_v4(), UpdateStockDto { current_stock: -4.0 }).await;
        assert!(matches!(result, Err(InventoryServiceError::Invalid(_))));
    }
}
