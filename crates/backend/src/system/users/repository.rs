use anyhow::{Context, Result};
use contracts::enums::staff_role::StaffRole;
use contracts::system::auth::UserInfo;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

/// Запись сотрудника вместе с хешем пароля
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: StaffRole,
    pub created_at: String,
}

impl StaffUser {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

fn from_row(row: &QueryResult) -> Result<StaffUser> {
    let role: String = row.try_get("", "role")?;
    Ok(StaffUser {
        id: row.try_get("", "id")?,
        username: row.try_get("", "username")?,
        password_hash: row.try_get("", "password_hash")?,
        display_name: row.try_get("", "display_name")?,
        // Неизвестная роль в БД получает минимальные права
        role: StaffRole::from_code(&role).unwrap_or(StaffRole::Kitchen),
        created_at: row.try_get("", "created_at")?,
    })
}

pub async fn insert(user: &StaffUser) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_users (id, username, password_hash, display_name, role, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            [
                user.id.clone().into(),
                user.username.clone().into(),
                user.password_hash.clone().into(),
                user.display_name.clone().into(),
                user.role.code().into(),
                user.created_at.clone().into(),
            ],
        ))
        .await
        .context("Failed to insert user")?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<StaffUser>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, password_hash, display_name, role, created_at
             FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn get_by_username(username: &str) -> Result<Option<StaffUser>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, password_hash, display_name, role, created_at
             FROM sys_users WHERE username = ?",
            [username.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn count_users() -> Result<i64> {
    let row = get_connection()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM sys_users".to_string(),
        ))
        .await?;
    match row {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}
