use super::repository;
use chrono::{Duration, Utc};
use contracts::domain::a002_customer::aggregate::{Customer, CustomerId};
use uuid::Uuid;

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    repository::list_all().await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Customer>> {
    repository::get_by_id(id).await
}

/// Создание клиента
pub async fn create(customer: Customer) -> anyhow::Result<Uuid> {
    if customer.name.trim().is_empty() {
        return Err(anyhow::anyhow!("Validation failed: customer name is empty"));
    }
    if !customer.total_spent.is_finite() || customer.total_spent < 0.0 {
        return Err(anyhow::anyhow!("Validation failed: total spent must be non-negative"));
    }
    repository::insert(&customer).await
}

/// Вставка тестовых клиентов: по одному на каждый уровень и статус активности
pub async fn insert_test_data() -> anyhow::Result<()> {
    let now = Utc::now();
    let data = [
        ("Ann Parker", "+1 555 0101", Some("ann@example.com"), 640.0, 31, Some(2)),
        ("Leo Grant", "+1 555 0177", None, 215.5, 9, Some(12)),
        ("Mia Chen", "+1 555 0142", Some("mia.chen@example.com"), 120.0, 5, Some(45)),
        ("Omar Haddad", "+1 555 0190", None, 48.9, 2, Some(120)),
        ("Sofia Rossi", "+1 555 0123", Some("sofia@example.com"), 499.99, 18, Some(7)),
        ("Walk-in Guest", "", None, 0.0, 0, None),
    ];

    for (name, phone, email, spent, orders, days_ago) in data {
        let customer = Customer {
            id: CustomerId::new_v4(),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
            total_spent: spent,
            total_orders: orders,
            last_order_date: days_ago.map(|d| now - Duration::days(d)),
            loyalty_points: (spent / 10.0).floor() as i64,
            created_at: Some(now - Duration::days(200)),
        };
        create(customer).await?;
    }

    tracing::info!("Inserted demo customers");
    Ok(())
}
