//! Уровень лояльности и активность клиента
//!
//! Пороги уровня: включительные нижние границы по сумме покупок: 100 / 200 / 500.
//! Пороги активности: включительные верхние границы по давности последнего заказа:
//! 7 / 30 / 90 дней.

use chrono::{DateTime, Duration, Utc};

use super::aggregate::Customer;
use crate::shared::elapsed::elapsed_since;
use crate::shared::money::sum_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomerTier {
    Bronze,
    Silver,
    Gold,
    Vip,
}

impl CustomerTier {
    pub fn all() -> [CustomerTier; 4] {
        [
            CustomerTier::Bronze,
            CustomerTier::Silver,
            CustomerTier::Gold,
            CustomerTier::Vip,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerTier::Bronze => "Bronze",
            CustomerTier::Silver => "Silver",
            CustomerTier::Gold => "Gold",
            CustomerTier::Vip => "VIP",
        }
    }

    /// Минимальная сумма покупок для уровня
    pub fn min_spent(&self) -> f64 {
        match self {
            CustomerTier::Bronze => 0.0,
            CustomerTier::Silver => 100.0,
            CustomerTier::Gold => 200.0,
            CustomerTier::Vip => 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityStatus {
    Active,
    Recent,
    Inactive,
    Dormant,
}

impl ActivityStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "Active",
            ActivityStatus::Recent => "Recent",
            ActivityStatus::Inactive => "Inactive",
            ActivityStatus::Dormant => "Dormant",
        }
    }
}

/// Уровень по сумме покупок. NaN и отрицательные суммы дают `Bronze`.
pub fn classify_customer_tier(total_spent: f64) -> CustomerTier {
    if total_spent.is_nan() || total_spent < 0.0 {
        return CustomerTier::Bronze;
    }
    CustomerTier::all()
        .into_iter()
        .rev()
        .find(|tier| total_spent >= tier.min_spent())
        .unwrap_or(CustomerTier::Bronze)
}

/// Активность по давности последнего заказа.
/// Без даты: `Dormant`; дата в будущем считается "только что".
pub fn classify_customer_activity(
    last_order_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ActivityStatus {
    let Some(last) = last_order_date else {
        return ActivityStatus::Dormant;
    };
    let since = elapsed_since(last, now);
    if since <= Duration::days(7) {
        ActivityStatus::Active
    } else if since <= Duration::days(30) {
        ActivityStatus::Recent
    } else if since <= Duration::days(90) {
        ActivityStatus::Inactive
    } else {
        ActivityStatus::Dormant
    }
}

/// Сводка для карточек над таблицей клиентов
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerSummary {
    pub total: usize,
    pub bronze: usize,
    pub silver: usize,
    pub gold: usize,
    pub vip: usize,
    /// Active + Recent
    pub engaged: usize,
    pub total_revenue: f64,
}

impl CustomerSummary {
    pub fn count_for(&self, tier: CustomerTier) -> usize {
        match tier {
            CustomerTier::Bronze => self.bronze,
            CustomerTier::Silver => self.silver,
            CustomerTier::Gold => self.gold,
            CustomerTier::Vip => self.vip,
        }
    }
}

pub fn summarize_customers(customers: &[Customer], now: DateTime<Utc>) -> CustomerSummary {
    let mut summary = CustomerSummary {
        total: customers.len(),
        total_revenue: sum_money(customers.iter().map(|c| c.total_spent)),
        ..Default::default()
    };
    for c in customers {
        match classify_customer_tier(c.total_spent) {
            CustomerTier::Bronze => summary.bronze += 1,
            CustomerTier::Silver => summary.silver += 1,
            CustomerTier::Gold => summary.gold += 1,
            CustomerTier::Vip => summary.vip += 1,
        }
        if matches!(
            classify_customer_activity(c.last_order_date, now),
            ActivityStatus::Active | ActivityStatus::Recent
        ) {
            summary.engaged += 1;
        }
    }
    summary
}
