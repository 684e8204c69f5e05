use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Схема создаётся при старте, если таблиц ещё нет
const BOOTSTRAP_SQL: &[(&str, &str)] = &[
    (
        "sys_users",
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            display_name TEXT,
            role TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    ),
    (
        "a001_order",
        r#"
        CREATE TABLE IF NOT EXISTS a001_order (
            id TEXT PRIMARY KEY NOT NULL,
            order_number TEXT NOT NULL,
            status TEXT NOT NULL,
            order_type TEXT NOT NULL,
            created_at TEXT,
            updated_at TEXT,
            estimated_ready_time TEXT,
            total_amount REAL NOT NULL DEFAULT 0,
            items_json TEXT NOT NULL DEFAULT '[]',
            customer_json TEXT
        );
        "#,
    ),
    (
        "a002_customer",
        r#"
        CREATE TABLE IF NOT EXISTS a002_customer (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            email TEXT,
            total_spent REAL NOT NULL DEFAULT 0,
            total_orders INTEGER NOT NULL DEFAULT 0,
            last_order_date TEXT,
            loyalty_points INTEGER NOT NULL DEFAULT 0,
            created_at TEXT
        );
        "#,
    ),
    (
        "a003_inventory_item",
        r#"
        CREATE TABLE IF NOT EXISTS a003_inventory_item (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT '',
            current_stock REAL NOT NULL DEFAULT 0,
            reorder_point REAL NOT NULL DEFAULT 0,
            cost_per_unit REAL NOT NULL DEFAULT 0,
            unit TEXT NOT NULL DEFAULT '',
            updated_at TEXT
        );
        "#,
    ),
];

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (table, sql) in BOOTSTRAP_SQL {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
