use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, UpdateStockDto};
use contracts::shared::lenient::SkipInvalid;

use crate::shared::api_utils::ApiClient;

/// GET /api/inventory
pub async fn fetch_inventory(api: &ApiClient) -> Result<Vec<InventoryItem>, String> {
    api.get_json::<SkipInvalid<InventoryItem>>("/api/inventory")
        .await
        .map(SkipInvalid::into_inner)
}

/// PUT /api/inventory/:id/stock
pub async fn update_stock(
    api: &ApiClient,
    id: &str,
    current_stock: f64,
) -> Result<InventoryItem, String> {
    api.put_json(
        &format!("/api/inventory/{}/stock", id),
        &UpdateStockDto { current_stock },
    )
    .await
}
