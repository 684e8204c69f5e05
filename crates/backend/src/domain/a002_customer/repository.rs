use contracts::domain::a002_customer::aggregate::{Customer, CustomerId};
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub total_spent: f64,
    pub total_orders: i32,
    pub last_order_date: Option<chrono::DateTime<chrono::Utc>>,
    pub loyalty_points: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        let id = CustomerId::from_string(&m.id).unwrap_or_else(|_| CustomerId::new(Uuid::nil()));
        Customer {
            id,
            name: m.name,
            phone: m.phone,
            email: m.email,
            total_spent: m.total_spent,
            total_orders: m.total_orders.max(0) as u32,
            last_order_date: m.last_order_date,
            loyalty_points: m.loyalty_points,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Клиенты по убыванию суммы покупок
pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    let items = Entity::find()
        .order_by_desc(Column::TotalSpent)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Customer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(customer: &Customer) -> anyhow::Result<Uuid> {
    let uuid = customer.id.value();
    let active = ActiveModel {
        id: Set(customer.id.as_string()),
        name: Set(customer.name.clone()),
        phone: Set(customer.phone.clone()),
        email: Set(customer.email.clone()),
        total_spent: Set(customer.total_spent),
        total_orders: Set(customer.total_orders as i32),
        last_order_date: Set(customer.last_order_date),
        loyalty_points: Set(customer.loyalty_points),
        created_at: Set(customer.created_at),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}
