use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, UpdateStockDto};

use crate::domain::a003_inventory_item;
use crate::domain::a003_inventory_item::service::InventoryServiceError;

fn inventory_error_status(err: &InventoryServiceError) -> StatusCode {
    match err {
        InventoryServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        InventoryServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
        InventoryServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/inventory
pub async fn list_all() -> Result<Json<Vec<InventoryItem>>, StatusCode> {
    match a003_inventory_item::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list inventory: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/inventory/:id/stock
pub async fn update_stock(
    Path(id): Path<String>,
    Json(dto): Json<UpdateStockDto>,
) -> Result<Json<InventoryItem>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    a003_inventory_item::service::update_stock(uuid, dto)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!("Stock update for {} failed: {}", uuid, e);
            inventory_error_status(&e)
        })
}

/// POST /api/inventory/testdata
pub async fn insert_test_data() -> StatusCode {
    match a003_inventory_item::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
