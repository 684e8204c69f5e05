//! Kitchen board: колонки по стадиям и модель карточки заказа

use chrono::{DateTime, Utc};
use contracts::domain::a001_order::aggregate::{Order, OrderItem};
use contracts::domain::a001_order::stages::{
    compute_stage_totals, group_orders_by_stage, sort_oldest_first, StageBuckets, StageTotal,
};
use contracts::domain::a001_order::status::KitchenStage;
use contracts::domain::a001_order::urgency::{classify_age_short, classify_row_urgency, AgeBucket};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::money::format_money;

use crate::shared::components::ui::badge::BadgeVariant;
use crate::shared::date_utils::format_time;

#[derive(Clone, Debug, PartialEq)]
pub struct KitchenColumn {
    pub stage: KitchenStage,
    pub orders: Vec<Order>,
    pub total: StageTotal,
}

impl KitchenColumn {
    pub fn header(&self) -> String {
        format!(
            "{} ({}) · {}",
            self.stage.title(),
            self.total.count,
            format_money(self.total.total_amount)
        )
    }
}

/// Три колонки New / Preparing / Ready, в каждой самые старые заказы сверху
pub fn build_kitchen_board(orders: Vec<Order>) -> Vec<KitchenColumn> {
    let mut buckets = group_orders_by_stage(orders);
    sort_oldest_first(&mut buckets.new);
    sort_oldest_first(&mut buckets.preparing);
    sort_oldest_first(&mut buckets.ready);

    let totals = compute_stage_totals(&buckets);
    let StageBuckets {
        new,
        preparing,
        ready,
    } = buckets;

    vec![
        KitchenColumn {
            stage: KitchenStage::New,
            orders: new,
            total: totals.new,
        },
        KitchenColumn {
            stage: KitchenStage::Preparing,
            orders: preparing,
            total: totals.preparing,
        },
        KitchenColumn {
            stage: KitchenStage::Ready,
            orders: ready,
            total: totals.ready,
        },
    ]
}

pub fn age_badge_variant(bucket: AgeBucket) -> BadgeVariant {
    match bucket {
        AgeBucket::Normal => BadgeVariant::Success,
        AgeBucket::Warning => BadgeVariant::Warning,
        AgeBucket::Urgent => BadgeVariant::Error,
    }
}

pub fn status_badge_variant(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Pending => BadgeVariant::Warning,
        OrderStatus::Confirmed | OrderStatus::Preparing => BadgeVariant::Primary,
        OrderStatus::Ready | OrderStatus::Completed => BadgeVariant::Success,
        OrderStatus::Cancelled => BadgeVariant::Error,
        OrderStatus::Unknown => BadgeVariant::Neutral,
    }
}

/// Всё, что показывает карточка заказа
#[derive(Clone, Debug, PartialEq)]
pub struct OrderCardModel {
    pub id: String,
    pub order_number: String,
    pub order_type: &'static str,
    pub customer_name: String,
    pub placed_at: String,
    pub age_label: String,
    pub age_variant: BadgeVariant,
    pub border_class: String,
    pub items: Vec<OrderItem>,
    pub total_label: String,
    pub next_action: Option<(OrderStatus, &'static str)>,
    pub can_cancel: bool,
}

impl OrderCardModel {
    pub fn build(order: &Order, now: DateTime<Utc>) -> Self {
        let age = classify_age_short(order.created_at, now);
        let border = classify_row_urgency(order.created_at, now);
        let next_action = order
            .status
            .next()
            .zip(order.status.next_action_label());

        Self {
            id: order.id.to_string(),
            order_number: order.order_number.clone(),
            order_type: order.order_type.display_name(),
            customer_name: order.customer_name().to_string(),
            placed_at: format_time(order.created_at),
            age_label: age.elapsed_label,
            age_variant: age_badge_variant(age.bucket),
            border_class: format!("order-card order-card--{}", border.css_modifier()),
            items: order.items.clone(),
            total_label: format_money(order.total_amount),
            next_action,
            can_cancel: order.status.can_cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use contracts::domain::a001_order::aggregate::OrderId;
    use contracts::enums::order_type::OrderType;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
    }

    fn order(number: &str, status: OrderStatus, minutes_ago: i64, total: f64) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_number: number.to_string(),
            status,
            created_at: Some(now() - Duration::minutes(minutes_ago)),
            estimated_ready_time: None,
            total_amount: total,
            items: vec![OrderItem {
                name: "Burger".into(),
                quantity: 1,
                price: total,
                modifiers: vec![],
                special_instructions: None,
            }],
            customer: None,
            order_type: OrderType::DineIn,
        }
    }

    #[test]
    fn test_board_columns_are_sorted_and_totalled() {
        let board = build_kitchen_board(vec![
            order("1", OrderStatus::Pending, 5, 10.10),
            order("2", OrderStatus::Confirmed, 25, 20.20),
            order("3", OrderStatus::Preparing, 12, 7.5),
            order("4", OrderStatus::Completed, 60, 99.0),
            order("5", OrderStatus::Ready, 3, 4.0),
        ]);

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].stage, KitchenStage::New);
        let new_numbers: Vec<&str> = board[0]
            .orders
            .iter()
            .map(|o| o.order_number.as_str())
            .collect();
        assert_eq!(new_numbers, vec!["2", "1"]);
        assert_eq!(board[0].total.count, 2);
        assert!((board[0].total.total_amount - 30.30).abs() < 1e-9);
        assert_eq!(board[1].total.count, 1);
        assert_eq!(board[2].total.count, 1);
    }

    #[test]
    fn test_empty_board_has_three_empty_columns() {
        let board = build_kitchen_board(Vec::new());
        assert_eq!(board.len(), 3);
        assert!(board.iter().all(|c| c.orders.is_empty() && c.total.count == 0));
        assert_eq!(board[2].header(), "Ready (0) · 0.00");
    }

    #[test]
    fn test_card_for_old_pending_order() {
        let card = OrderCardModel::build(&order("7", OrderStatus::Pending, 25, 12.0), now());
        assert_eq!(card.age_label, "25m");
        assert_eq!(card.age_variant, BadgeVariant::Error);
        // рамка по шкале 30/20: 25 минут ещё warning
        assert_eq!(card.border_class, "order-card order-card--warning");
        assert_eq!(card.next_action, Some((OrderStatus::Confirmed, "Confirm")));
        assert!(card.can_cancel);
        assert_eq!(card.total_label, "12.00");
        assert_eq!(card.placed_at, "17:35");
    }

    #[test]
    fn test_card_for_ready_order() {
        let card = OrderCardModel::build(&order("8", OrderStatus::Ready, 2, 5.0), now());
        assert_eq!(card.age_variant, BadgeVariant::Success);
        assert_eq!(card.next_action, Some((OrderStatus::Completed, "Complete")));
    }

    #[test]
    fn test_card_without_timestamp() {
        let mut o = order("9", OrderStatus::Preparing, 0, 5.0);
        o.created_at = None;
        let card = OrderCardModel::build(&o, now());
        assert_eq!(card.age_label, "");
        assert_eq!(card.placed_at, "");
        assert_eq!(card.age_variant, BadgeVariant::Success);
        assert_eq!(card.border_class, "order-card order-card--normal");
    }
}
