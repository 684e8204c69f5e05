use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::order_status::OrderStatus;
use crate::enums::order_type::OrderType;
use crate::shared::lenient;
use crate::shared::money::{from_cents, sum_money, to_cents};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор заказа
    OrderId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ ресторана
///
/// Заказ создаёт внешняя подсистема приёма заказов; админка меняет только статус.
/// Отсутствующие, `null` и нечитаемые поля получают значения по умолчанию
/// (см. [`crate::shared::lenient`]), чтобы один битый заказ не ломал весь список.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub order_number: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: OrderStatus,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub estimated_ready_time: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<OrderItem>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub customer: Option<CustomerRef>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub order_type: OrderType,
}

/// Позиция заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: u32,

    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,

    #[serde(default, deserialize_with = "lenient::list")]
    pub modifiers: Vec<String>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub special_instructions: Option<String>,
}

impl OrderItem {
    /// Стоимость строки (цена × количество)
    pub fn line_total(&self) -> f64 {
        from_cents(to_cents(self.price).saturating_mul(i64::from(self.quantity)))
    }
}

/// Ссылка на клиента внутри заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub phone: Option<String>,
}

impl Order {
    /// Новый заказ в начальном статусе `pending`
    pub fn new_pending(
        order_number: String,
        order_type: OrderType,
        items: Vec<OrderItem>,
        customer: Option<CustomerRef>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total_amount = sum_money(items.iter().map(OrderItem::line_total));
        Self {
            id: OrderId::new_v4(),
            order_number,
            status: OrderStatus::Pending,
            created_at: Some(created_at),
            estimated_ready_time: None,
            total_amount,
            items,
            customer,
            order_type,
        }
    }

    /// Общее количество единиц в заказе
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Имя клиента для карточки; пустое для заказов без клиента
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Валидация данных перед записью
    pub fn validate(&self) -> Result<(), String> {
        if self.order_number.trim().is_empty() {
            return Err("Order number must not be empty".into());
        }
        if self.items.is_empty() {
            return Err("Order must contain at least one item".into());
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err("Total amount must be a non-negative number".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Тело запроса PATCH /api/orders/:id/status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::stages::{compute_stage_totals, group_orders_by_stage};
    use crate::shared::lenient::SkipInvalid;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_full_order() {
        let json = r#"{
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "orderNumber": "A-102",
            "status": "preparing",
            "createdAt": "2025-06-01T11:40:00Z",
            "totalAmount": 24.5,
            "items": [
                {"name": "Burger", "quantity": 2, "price": 9.75, "modifiers": ["no onion"]},
                {"name": "Fries", "quantity": 1, "price": 5.0, "specialInstructions": "extra crispy"}
            ],
            "customer": {"id": null, "name": "Ann", "phone": "+100"},
            "orderType": "takeout"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_number, "A-102");
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.order_type, OrderType::Takeout);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.customer_name(), "Ann");
        assert_eq!(
            order.created_at,
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 11, 40, 0).unwrap())
        );
        assert_eq!(order.items[1].special_instructions.as_deref(), Some("extra crispy"));
    }

    #[test]
    fn test_null_amount_does_not_break_the_list() {
        let json = r#"[
            {"id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff", "status": "pending", "totalAmount": 12.5},
            {"id": "7f9619ff-8b86-d011-b42d-00cf4fc964ff", "status": "preparing", "totalAmount": null,
             "items": [{"name": "Soup", "quantity": 1.5, "price": null}, "garbage"]},
            {"id": "8f9619ff-8b86-d011-b42d-00cf4fc964ff", "status": "ready", "totalAmount": "8.00"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[1].total_amount, 0.0);
        assert_eq!(orders[1].items.len(), 1);
        assert_eq!(orders[1].items[0].quantity, 1);
        assert_eq!(orders[1].items[0].price, 0.0);

        let buckets = group_orders_by_stage(orders);
        assert_eq!(buckets.new.len(), 1);
        assert_eq!(buckets.preparing.len(), 1);
        assert_eq!(buckets.ready.len(), 1);
        let totals = compute_stage_totals(&buckets);
        assert_eq!(totals.new.total_amount, 12.5);
        assert_eq!(totals.preparing.total_amount, 0.0);
        assert_eq!(totals.ready.total_amount, 8.0);
    }

    #[test]
    fn test_order_with_bad_id_is_skipped() {
        let json = r#"[
            {"id": "not-a-uuid", "status": "pending"},
            {"id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff", "status": "ready"}
        ]"#;
        let orders = serde_json::from_str::<SkipInvalid<Order>>(json).unwrap().into_inner();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Ready);
    }

    #[test]
    fn test_null_status_and_bad_dates() {
        let json = r#"{"id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff", "status": null,
            "createdAt": "yesterday", "orderType": 3, "customer": "walk-in"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.created_at, None);
        assert_eq!(order.order_type, OrderType::default());
        assert_eq!(order.customer_name(), "");
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem { name: "Tea".into(), quantity: 3, price: 1.1, ..Default::default() };
        assert_eq!(item.line_total(), 3.3);
        let free = OrderItem { quantity: 1_000_000, price: 0.0, ..Default::default() };
        assert_eq!(free.line_total(), 0.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let json = r#"{"id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.created_at, None);
        assert_eq!(order.total_amount, 0.0);
        assert!(order.items.is_empty());
        assert_eq!(order.customer_name(), "");
    }

    #[test]
    fn test_new_pending_computes_total() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let order = Order::new_pending(
            "A-1".into(),
            OrderType::DineIn,
            vec![
                OrderItem { name: "Soup".into(), quantity: 3, price: 4.1, ..Default::default() },
                OrderItem { name: "Tea".into(), quantity: 1, price: 1.2, ..Default::default() },
            ],
            None,
            now,
        );
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 13.5);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_order() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let order = Order::new_pending("A-2".into(), OrderType::Delivery, vec![], None, now);
        assert!(order.validate().is_err());
    }
}
