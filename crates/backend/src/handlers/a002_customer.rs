use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_customer::aggregate::Customer;

use crate::domain::a002_customer;

/// GET /api/customers
pub async fn list_all() -> Result<Json<Vec<Customer>>, StatusCode> {
    match a002_customer::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list customers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/customers/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Customer>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match a002_customer::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/customers/testdata
pub async fn insert_test_data() -> StatusCode {
    match a002_customer::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
