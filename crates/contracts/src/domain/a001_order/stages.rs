//! Группировка заказов по колонкам кухонной доски и итоги по колонкам
//!
//! Группировка стабильная: порядок внутри колонки совпадает с порядком входа.
//! Сортировка "старые сверху" выполняется отдельным явным шагом: [`sort_oldest_first`].

use super::aggregate::Order;
use super::status::KitchenStage;
use crate::shared::money::sum_money;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StageBuckets {
    /// pending + confirmed
    pub new: Vec<Order>,
    pub preparing: Vec<Order>,
    pub ready: Vec<Order>,
}

impl StageBuckets {
    pub fn bucket(&self, stage: KitchenStage) -> &[Order] {
        match stage {
            KitchenStage::New => &self.new,
            KitchenStage::Preparing => &self.preparing,
            KitchenStage::Ready => &self.ready,
        }
    }

    fn bucket_mut(&mut self, stage: KitchenStage) -> &mut Vec<Order> {
        match stage {
            KitchenStage::New => &mut self.new,
            KitchenStage::Preparing => &mut self.preparing,
            KitchenStage::Ready => &mut self.ready,
        }
    }

    /// Количество заказов на доске
    pub fn len(&self) -> usize {
        self.new.len() + self.preparing.len() + self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageTotal {
    pub count: usize,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StageTotals {
    pub new: StageTotal,
    pub preparing: StageTotal,
    pub ready: StageTotal,
}

impl StageTotals {
    pub fn get(&self, stage: KitchenStage) -> StageTotal {
        match stage {
            KitchenStage::New => self.new,
            KitchenStage::Preparing => self.preparing,
            KitchenStage::Ready => self.ready,
        }
    }
}

/// Раскладывает заказы по колонкам. Завершённые, отменённые и заказы
/// с нераспознанным статусом не попадают ни в одну колонку.
pub fn group_orders_by_stage<I>(orders: I) -> StageBuckets
where
    I: IntoIterator<Item = Order>,
{
    let mut buckets = StageBuckets::default();
    for order in orders {
        if let Some(stage) = order.status.stage() {
            buckets.bucket_mut(stage).push(order);
        }
    }
    buckets
}

fn total_of(orders: &[Order]) -> StageTotal {
    StageTotal {
        count: orders.len(),
        total_amount: sum_money(orders.iter().map(|o| o.total_amount)),
    }
}

/// Количество и сумма по каждой колонке
pub fn compute_stage_totals(buckets: &StageBuckets) -> StageTotals {
    StageTotals {
        new: total_of(&buckets.new),
        preparing: total_of(&buckets.preparing),
        ready: total_of(&buckets.ready),
    }
}

/// Старые заказы первыми (по `created_at`), заказы без времени идут в конце.
/// Сортировка стабильная.
pub fn sort_oldest_first(orders: &mut [Order]) {
    orders.sort_by_key(|o| (o.created_at.is_none(), o.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderId;
    use crate::domain::a001_order::urgency::{classify_age, AgeBucket};
    use crate::enums::order_status::OrderStatus;
    use crate::enums::order_type::OrderType;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn order(number: &str, status: OrderStatus, minutes_ago: i64, amount: f64) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_number: number.to_string(),
            status,
            created_at: Some(now() - Duration::minutes(minutes_ago)),
            estimated_ready_time: None,
            total_amount: amount,
            items: vec![],
            customer: None,
            order_type: OrderType::DineIn,
        }
    }

    fn numbers(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.order_number.as_str()).collect()
    }

    #[test]
    fn test_end_to_end_board() {
        let orders = vec![
            order("0", OrderStatus::Pending, 25, 10.0),
            order("1", OrderStatus::Preparing, 5, 20.0),
            order("2", OrderStatus::Completed, 60, 30.0),
        ];
        let first = orders[0].clone();
        let second = orders[1].clone();

        let buckets = group_orders_by_stage(orders);
        assert_eq!(buckets.new, vec![first.clone()]);
        assert_eq!(buckets.preparing, vec![second]);
        assert!(buckets.ready.is_empty());

        let totals = compute_stage_totals(&buckets);
        assert_eq!(totals.new, StageTotal { count: 1, total_amount: 10.0 });
        assert_eq!(totals.preparing, StageTotal { count: 1, total_amount: 20.0 });
        assert_eq!(totals.ready, StageTotal { count: 0, total_amount: 0.0 });

        assert_eq!(classify_age(first.created_at, now()).bucket, AgeBucket::Urgent);
    }

    #[test]
    fn test_partition_accounts_for_every_order() {
        let statuses = [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
            OrderStatus::Unknown,
        ];
        let orders: Vec<Order> = (0..28)
            .map(|i| order(&i.to_string(), statuses[i % statuses.len()], i as i64, 1.0))
            .collect();
        let excluded = orders
            .iter()
            .filter(|o| o.status.stage().is_none())
            .count();
        let input_len = orders.len();

        let buckets = group_orders_by_stage(orders);
        assert_eq!(buckets.len() + excluded, input_len);
        assert_eq!(buckets.new.len(), 8);
        assert_eq!(buckets.preparing.len(), 4);
        assert_eq!(buckets.ready.len(), 4);

        let mut seen = std::collections::HashSet::new();
        for stage in KitchenStage::all() {
            for o in buckets.bucket(stage) {
                assert!(seen.insert(o.id), "order placed in two buckets");
            }
        }
    }

    #[test]
    fn test_grouping_preserves_input_order() {
        let orders = vec![
            order("young", OrderStatus::Pending, 1, 1.0),
            order("old", OrderStatus::Confirmed, 40, 1.0),
            order("middle", OrderStatus::Pending, 15, 1.0),
        ];
        let buckets = group_orders_by_stage(orders);
        assert_eq!(numbers(&buckets.new), vec!["young", "old", "middle"]);
    }

    #[test]
    fn test_sort_oldest_first_is_explicit_and_stable() {
        let mut orders = vec![
            order("young", OrderStatus::Pending, 1, 1.0),
            order("old", OrderStatus::Pending, 40, 1.0),
            order("twin-a", OrderStatus::Pending, 15, 1.0),
            order("twin-b", OrderStatus::Pending, 15, 1.0),
        ];
        orders[0].created_at = None;
        sort_oldest_first(&mut orders);
        assert_eq!(numbers(&orders), vec!["old", "twin-a", "twin-b", "young"]);
    }

    #[test]
    fn test_totals_are_additive_in_cents() {
        let orders = vec![
            order("a", OrderStatus::Ready, 1, 0.1),
            order("b", OrderStatus::Ready, 2, 0.2),
            order("c", OrderStatus::Ready, 3, 19.99),
            order("d", OrderStatus::Ready, 3, f64::NAN),
        ];
        let totals = compute_stage_totals(&group_orders_by_stage(orders));
        assert_eq!(totals.ready.count, 4);
        assert_eq!(totals.ready.total_amount, 20.29);
        assert_eq!(totals.get(KitchenStage::Ready), totals.ready);
    }
}
