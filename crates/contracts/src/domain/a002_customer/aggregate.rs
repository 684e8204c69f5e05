use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::lenient;

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор клиента
    CustomerId
);

/// Клиент ресторана
///
/// `total_spent` только растёт; уровень и активность вычисляются на лету,
/// см. [`super::tier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub total_spent: f64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub total_orders: u32,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub last_order_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::integer")]
    pub loyalty_points: i64,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Средний чек; 0 для клиентов без заказов
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders == 0 || !self.total_spent.is_finite() {
            return 0.0;
        }
        crate::shared::money::from_cents(
            crate::shared::money::to_cents(self.total_spent) / self.total_orders as i64,
        )
    }

    /// Поиск по имени, телефону или email без учёта регистра
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q)
            || self.phone.to_lowercase().contains(&q)
            || self
                .email
                .as_deref()
                .map(|e| e.to_lowercase().contains(&q))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, phone: &str, email: Option<&str>) -> Customer {
        Customer {
            id: CustomerId::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: email.map(Into::into),
            total_spent: 250.0,
            total_orders: 4,
            last_order_date: None,
            loyalty_points: 25,
            created_at: None,
        }
    }

    #[test]
    fn test_matches() {
        let c = customer("Maria Lopez", "+1 555 0100", Some("maria@example.com"));
        assert!(c.matches("maria"));
        assert!(c.matches("LOPEZ"));
        assert!(c.matches("555"));
        assert!(c.matches("example.com"));
        assert!(c.matches("   "));
        assert!(!c.matches("john"));
    }

    #[test]
    fn test_average_order_value() {
        let mut c = customer("A", "1", None);
        assert_eq!(c.average_order_value(), 62.5);
        c.total_orders = 0;
        assert_eq!(c.average_order_value(), 0.0);
    }

    #[test]
    fn test_deserialize_sparse_customer() {
        let json = r#"{"id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff", "name": "Bo", "totalSpent": 120.5}"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.total_spent, 120.5);
        assert_eq!(c.last_order_date, None);
        assert_eq!(c.phone, "");
    }

    #[test]
    fn test_null_spend_does_not_break_the_list() {
        let json = r#"[
            {"id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff", "name": "Ann", "totalSpent": null, "totalOrders": 2.7},
            {"id": "7f9619ff-8b86-d011-b42d-00cf4fc964ff", "name": "Bo", "totalSpent": 640, "phone": null}
        ]"#;
        let customers: Vec<Customer> = serde_json::from_str(json).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].total_spent, 0.0);
        assert_eq!(customers[0].total_orders, 2);
        assert_eq!(customers[1].total_spent, 640.0);
        assert_eq!(customers[1].phone, "");
    }
}
