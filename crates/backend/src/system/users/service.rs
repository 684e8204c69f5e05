use anyhow::Result;
use chrono::Utc;
use contracts::enums::staff_role::StaffRole;

use super::repository::{self, StaffUser};
use crate::system::auth::password;

/// Create a new staff account, returns its id
pub async fn create(
    username: &str,
    password_plain: &str,
    display_name: Option<String>,
    role: StaffRole,
) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }
    if repository::get_by_username(username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    password::validate_password_strength(password_plain)?;

    let user = StaffUser {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        password_hash: password::hash_password(password_plain)?,
        display_name,
        role,
        created_at: Utc::now().to_rfc3339(),
    };
    repository::insert(&user).await?;
    Ok(user.id)
}

pub async fn get_by_id(id: &str) -> Result<Option<StaffUser>> {
    repository::get_by_id(id).await
}

/// Проверка логина и пароля; `None` если пользователь не найден или пароль неверный
pub async fn verify_credentials(username: &str, password_plain: &str) -> Result<Option<StaffUser>> {
    let Some(user) = repository::get_by_username(username.trim()).await? else {
        return Ok(None);
    };
    if password::verify_password(password_plain, &user.password_hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}
