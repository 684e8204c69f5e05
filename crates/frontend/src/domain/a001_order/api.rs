use contracts::domain::a001_order::aggregate::{Order, UpdateOrderStatusDto};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::lenient::SkipInvalid;

use crate::shared::api_utils::ApiClient;

/// GET /api/orders
pub async fn fetch_orders(api: &ApiClient) -> Result<Vec<Order>, String> {
    api.get_json::<SkipInvalid<Order>>("/api/orders")
        .await
        .map(SkipInvalid::into_inner)
}

/// PATCH /api/orders/:id/status: бэкенд проверяет допустимость перехода
pub async fn update_order_status(
    api: &ApiClient,
    id: &str,
    new_status: OrderStatus,
) -> Result<Order, String> {
    api.patch_json(
        &format!("/api/orders/{}/status", id),
        &UpdateOrderStatusDto { status: new_status },
    )
    .await
}
