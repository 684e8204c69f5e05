use chrono::{DateTime, Utc};
use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a001_order::urgency::{classify_age, classify_row_urgency};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::money::format_money;

use crate::domain::a001_order::ui::kitchen::view_model::status_badge_variant;
use crate::shared::components::ui::badge::BadgeVariant;
use crate::shared::date_utils::format_datetime;

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    pub status_label: &'static str,
    pub status_variant: BadgeVariant,
    pub urgency_class: String,
    pub age_label: String,
    pub created_label: String,
    pub customer_name: String,
    pub order_type: &'static str,
    pub item_count: u32,
    pub total_label: String,
}

impl OrderRow {
    pub fn build(order: &Order, now: DateTime<Utc>) -> Self {
        // точка срочности имеет смысл только для заказов в работе
        let urgency = if order.status.stage().is_some() {
            classify_row_urgency(order.created_at, now).css_modifier()
        } else {
            "none"
        };
        Self {
            id: order.id.to_string(),
            order_number: order.order_number.clone(),
            status_label: order.status.display_name(),
            status_variant: status_badge_variant(order.status),
            urgency_class: format!("urgency-dot urgency-dot--{}", urgency),
            age_label: classify_age(order.created_at, now).elapsed_label,
            created_label: format_datetime(order.created_at),
            customer_name: order.customer_name().to_string(),
            order_type: order.order_type.display_name(),
            item_count: order.item_count(),
            total_label: format_money(order.total_amount),
        }
    }
}

/// Строки таблицы с фильтром по статусу; `None` означает все заказы
pub fn build_order_rows(
    orders: &[Order],
    status: Option<OrderStatus>,
    now: DateTime<Utc>,
) -> Vec<OrderRow> {
    orders
        .iter()
        .filter(|o| status.map_or(true, |s| o.status == s))
        .map(|o| OrderRow::build(o, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use contracts::domain::a001_order::aggregate::{CustomerRef, OrderId, OrderItem};
    use contracts::enums::order_type::OrderType;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn order(status: OrderStatus, minutes_ago: i64) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_number: "1042".into(),
            status,
            created_at: Some(now() - Duration::minutes(minutes_ago)),
            estimated_ready_time: None,
            total_amount: 1234.5,
            items: vec![OrderItem {
                name: "Pasta".into(),
                quantity: 3,
                price: 411.5,
                modifiers: vec![],
                special_instructions: None,
            }],
            customer: Some(CustomerRef {
                id: None,
                name: "Ann".into(),
                phone: None,
            }),
            order_type: OrderType::Delivery,
        }
    }

    #[test]
    fn test_row_fields() {
        let row = OrderRow::build(&order(OrderStatus::Preparing, 35), now());
        assert_eq!(row.urgency_class, "urgency-dot urgency-dot--urgent");
        assert_eq!(row.age_label, "35 minutes ago");
        assert_eq!(row.status_label, "Preparing");
        assert_eq!(row.customer_name, "Ann");
        assert_eq!(row.item_count, 3);
        assert_eq!(row.total_label, "1 234.50");
        assert_eq!(row.created_label, "01.05.2024 11:25");
    }

    #[test]
    fn test_row_urgency_uses_30_20_scale() {
        let row = OrderRow::build(&order(OrderStatus::Pending, 25), now());
        assert_eq!(row.urgency_class, "urgency-dot urgency-dot--warning");
        let row = OrderRow::build(&order(OrderStatus::Pending, 15), now());
        assert_eq!(row.urgency_class, "urgency-dot urgency-dot--normal");
    }

    #[test]
    fn test_finished_orders_have_no_urgency() {
        let row = OrderRow::build(&order(OrderStatus::Completed, 120), now());
        assert_eq!(row.urgency_class, "urgency-dot urgency-dot--none");
    }

    #[test]
    fn test_status_filter() {
        let orders = vec![
            order(OrderStatus::Pending, 1),
            order(OrderStatus::Ready, 2),
            order(OrderStatus::Pending, 3),
        ];
        assert_eq!(build_order_rows(&orders, None, now()).len(), 3);
        assert_eq!(
            build_order_rows(&orders, Some(OrderStatus::Pending), now()).len(),
            2
        );
        assert!(build_order_rows(&orders, Some(OrderStatus::Cancelled), now()).is_empty());
    }
}
