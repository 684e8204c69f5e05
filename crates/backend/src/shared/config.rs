use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub access_token_hours: i64,
    pub admin_password: String,
    /// If absent, a random secret is generated at startup (tokens die on restart)
    pub jwt_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_hours: 12,
            admin_password: "admin".to_string(),
            jwt_secret: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub demo_data: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/restaurant.db"

[auth]
access_token_hours = 12
admin_password = "admin"

[seed]
demo_data = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.access_token_hours <= 0 {
        anyhow::bail!("auth.access_token_hours must be positive");
    }
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/restaurant.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.access_token_hours, 12);
        assert!(config.auth.jwt_secret.is_none());
        assert!(config.seed.demo_data);
    }

    #[test]
    fn test_optional_sections_default() {
        let config = parse_config("[database]\npath = \"/var/lib/app.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.admin_password, "admin");
        assert!(!config.seed.demo_data);
        assert_eq!(get_database_path(&config), PathBuf::from("/var/lib/app.db"));
    }

    #[test]
    fn test_rejects_non_positive_token_lifetime() {
        let toml = "[database]\npath = \"a.db\"\n[auth]\naccess_token_hours = 0\nadmin_password = \"x\"\n";
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_workspace_config_parses() {
        let contents = include_str!("../../../../config.toml");
        let config = parse_config(contents).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
