use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_order::aggregate::{Order, UpdateOrderStatusDto};
use contracts::enums::order_status::OrderStatus;
use serde::Deserialize;

use crate::domain::a001_order;
use crate::domain::a001_order::service::OrderServiceError;

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<OrderStatus>, StatusCode> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(code) => match OrderStatus::from_code(code) {
            OrderStatus::Unknown => Err(StatusCode::BAD_REQUEST),
            status => Ok(Some(status)),
        },
    }
}

fn order_error_status(err: &OrderServiceError) -> StatusCode {
    match err {
        OrderServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        OrderServiceError::Transition(_) | OrderServiceError::Stale(_) => StatusCode::CONFLICT,
        OrderServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/orders?status=
pub async fn list_all(Query(query): Query<OrderListQuery>) -> Result<Json<Vec<Order>>, StatusCode> {
    let status = parse_status_filter(query.status.as_deref())?;
    match a001_order::service::list_all(status).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list orders: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/orders/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Order>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match a001_order::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PATCH /api/orders/:id/status
pub async fn update_status(
    Path(id): Path<String>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<Json<Order>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    if dto.status == OrderStatus::Unknown {
        return Err(StatusCode::BAD_REQUEST);
    }
    match a001_order::service::change_status(uuid, dto.status).await {
        Ok(order) => Ok(Json(order)),
        Err(e) => {
            let status = order_error_status(&e);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!("Status update for order {} failed: {}", uuid, e);
            } else {
                tracing::warn!("Status update for order {} rejected: {}", uuid, e);
            }
            Err(status)
        }
    }
}

/// POST /api/orders/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_order::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
