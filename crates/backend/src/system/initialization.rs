use anyhow::Result;
use contracts::enums::staff_role::StaffRole;

use crate::shared::config::Config;

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists(config: &Config) -> Result<()> {
    use crate::system::users::{repository, service};

    if repository::count_users().await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default owner account...");
    let admin_id = service::create(
        "admin",
        &config.auth.admin_password,
        Some("Administrator".to_string()),
        StaffRole::Owner,
    )
    .await?;

    tracing::warn!("Default owner account created: username 'admin', id {}", admin_id);
    if config.auth.admin_password == "admin" {
        tracing::warn!("The admin password is the default one, set auth.admin_password in config.toml");
    }
    Ok(())
}

/// Заполнение пустых таблиц демонстрационными данными
pub async fn seed_demo_data(config: &Config) -> Result<()> {
    use crate::domain::{a001_order, a002_customer, a003_inventory_item};

    if !config.seed.demo_data {
        return Ok(());
    }

    if a001_order::repository::count().await? == 0 {
        a001_order::service::insert_test_data().await?;
    }
    if a002_customer::repository::count().await? == 0 {
        a002_customer::service::insert_test_data().await?;
    }
    if a003_inventory_item::repository::count().await? == 0 {
        a003_inventory_item::service::insert_test_data().await?;
    }
    Ok(())
}
