use chrono::Utc;
use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, InventoryItemId};
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_inventory_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: f64,
    pub reorder_point: f64,
    pub cost_per_unit: f64,
    pub unit: String,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryItem {
    fn from(m: Model) -> Self {
        let id = InventoryItemId::from_string(&m.id).unwrap_or_else(|_| InventoryItemId::new(Uuid::nil()));
        InventoryItem {
            id,
            name: m.name,
            category: m.category,
            current_stock: m.current_stock,
            reorder_point: m.reorder_point,
            cost_per_unit: m.cost_per_unit,
            unit: m.unit,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Позиции склада по категории и названию
pub async fn list_all() -> anyhow::Result<Vec<InventoryItem>> {
    let items = Entity::find()
        .order_by_asc(Column::Category)
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<InventoryItem>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(item: &InventoryItem) -> anyhow::Result<Uuid> {
    let uuid = item.id.value();
    let active = ActiveModel {
        id: Set(item.id.as_string()),
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        current_stock: Set(item.current_stock),
        reorder_point: Set(item.reorder_point),
        cost_per_unit: Set(item.cost_per_unit),
        unit: Set(item.unit.clone()),
        updated_at: Set(Some(Utc::now())),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update_stock(id: Uuid, current_stock: f64) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::CurrentStock, Expr::value(current_stock))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}
