use chrono::{DateTime, Utc};
use contracts::domain::a002_customer::aggregate::Customer;
use contracts::domain::a002_customer::tier::{
    classify_customer_activity, classify_customer_tier, ActivityStatus, CustomerTier,
};
use contracts::shared::money::format_money;

use crate::shared::components::ui::badge::BadgeVariant;
use crate::shared::date_utils::format_date;

pub fn tier_variant(tier: CustomerTier) -> BadgeVariant {
    match tier {
        CustomerTier::Bronze => BadgeVariant::Neutral,
        CustomerTier::Silver => BadgeVariant::Primary,
        CustomerTier::Gold => BadgeVariant::Warning,
        CustomerTier::Vip => BadgeVariant::Success,
    }
}

pub fn activity_variant(activity: ActivityStatus) -> BadgeVariant {
    match activity {
        ActivityStatus::Active => BadgeVariant::Success,
        ActivityStatus::Recent => BadgeVariant::Primary,
        ActivityStatus::Inactive => BadgeVariant::Warning,
        ActivityStatus::Dormant => BadgeVariant::Error,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub tier: CustomerTier,
    pub activity: ActivityStatus,
    pub total_spent_label: String,
    pub total_orders: u32,
    pub average_label: String,
    pub loyalty_points: i64,
    pub last_order_label: String,
}

impl CustomerRow {
    pub fn build(c: &Customer, now: DateTime<Utc>) -> Self {
        let contact = match (&c.email, c.phone.is_empty()) {
            (Some(email), false) => format!("{} · {}", c.phone, email),
            (Some(email), true) => email.clone(),
            (None, _) => c.phone.clone(),
        };
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            contact,
            tier: classify_customer_tier(c.total_spent),
            activity: classify_customer_activity(c.last_order_date, now),
            total_spent_label: format_money(c.total_spent),
            total_orders: c.total_orders,
            average_label: format_money(c.average_order_value()),
            loyalty_points: c.loyalty_points,
            last_order_label: format_date(c.last_order_date),
        }
    }
}

/// Строки после поиска, самые ценные клиенты сверху
pub fn build_customer_rows(customers: &[Customer], query: &str, now: DateTime<Utc>) -> Vec<CustomerRow> {
    let mut matched: Vec<&Customer> = customers.iter().filter(|c| c.matches(query)).collect();
    matched.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    matched.into_iter().map(|c| CustomerRow::build(c, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use contracts::domain::a002_customer::aggregate::CustomerId;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn customer(name: &str, phone: &str, spent: f64, days_ago: Option<i64>) -> Customer {
        Customer {
            id: CustomerId::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            total_spent: spent,
            total_orders: 4,
            last_order_date: days_ago.map(|d| now() - Duration::days(d)),
            loyalty_points: 0,
            created_at: None,
        }
    }

    #[test]
    fn test_rows_are_searched_and_sorted() {
        let list = vec![
            customer("Leo", "555-01", 150.0, Some(3)),
            customer("Ann", "555-02", 600.0, Some(40)),
            customer("Bob", "777-03", 20.0, None),
        ];
        let rows = build_customer_rows(&list, "555", now());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Leo"]);
        assert_eq!(rows[0].tier, CustomerTier::Vip);
        assert_eq!(rows[0].activity, ActivityStatus::Inactive);
        assert_eq!(rows[1].tier, CustomerTier::Silver);
        assert_eq!(rows[1].activity, ActivityStatus::Active);
    }

    #[test]
    fn test_row_without_orders() {
        let row = CustomerRow::build(&customer("Bob", "", 0.0, None), now());
        assert_eq!(row.tier, CustomerTier::Bronze);
        assert_eq!(row.activity, ActivityStatus::Dormant);
        assert_eq!(row.last_order_label, "-");
        assert_eq!(row.average_label, "0.00");
    }

    #[test]
    fn test_contact_joins_phone_and_email() {
        let mut c = customer("Mia", "555-09", 10.0, None);
        c.email = Some("mia@example.com".into());
        assert_eq!(CustomerRow::build(&c, now()).contact, "555-09 · mia@example.com");
        c.phone.clear();
        assert_eq!(CustomerRow::build(&c, now()).contact, "mia@example.com");
    }

    #[test]
    fn test_variants() {
        assert_eq!(tier_variant(CustomerTier::Vip), BadgeVariant::Success);
        assert_eq!(activity_variant(ActivityStatus::Dormant), BadgeVariant::Error);
    }
}
