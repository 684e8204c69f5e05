use chrono::Utc;
use contracts::domain::a001_order::aggregate::{CustomerRef, Order, OrderId, OrderItem};
use contracts::enums::order_status::OrderStatus;
use contracts::enums::order_type::OrderType;
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_number: String,
    pub status: String,
    pub order_type: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub estimated_ready_time: Option<chrono::DateTime<chrono::Utc>>,
    pub total_amount: f64,
    pub items_json: String,
    pub customer_json: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        // Битые JSON-колонки не должны ронять весь список
        let items: Vec<OrderItem> = serde_json::from_str(&m.items_json).unwrap_or_else(|e| {
            tracing::warn!("Order {}: unreadable items_json: {}", m.id, e);
            Vec::new()
        });
        let customer: Option<CustomerRef> = m
            .customer_json
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok());
        let id = OrderId::from_string(&m.id).unwrap_or_else(|_| OrderId::new(Uuid::nil()));

        Order {
            id,
            order_number: m.order_number,
            status: OrderStatus::from_code(&m.status),
            created_at: m.created_at,
            estimated_ready_time: m.estimated_ready_time,
            total_amount: m.total_amount,
            items,
            customer,
            order_type: OrderType::from_code(&m.order_type),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Все заказы, новые первыми. Фильтр по статусу опционален.
pub async fn list_all(status: Option<OrderStatus>) -> anyhow::Result<Vec<Order>> {
    let mut query = Entity::find();
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status.code()));
    }
    let items = query
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(order: &Order) -> anyhow::Result<Uuid> {
    let uuid = order.id.value();
    let active = ActiveModel {
        id: Set(order.id.as_string()),
        order_number: Set(order.order_number.clone()),
        status: Set(order.status.code().to_string()),
        order_type: Set(order.order_type.code().to_string()),
        created_at: Set(order.created_at),
        updated_at: Set(Some(Utc::now())),
        estimated_ready_time: Set(order.estimated_ready_time),
        total_amount: Set(order.total_amount),
        items_json: Set(serde_json::to_string(&order.items)?),
        customer_json: Set(match &order.customer {
            Some(c) => Some(serde_json::to_string(c)?),
            None => None,
        }),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Записывает новый статус, только если в БД всё ещё `expected`.
/// Проверка самого перехода выполняется в сервисе.
pub async fn update_status(
    id: Uuid,
    expected: OrderStatus,
    status: OrderStatus,
) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(status.code()))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::Status.eq(expected.code()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}
