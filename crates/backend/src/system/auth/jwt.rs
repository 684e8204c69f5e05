use anyhow::{Context, Result};
use chrono::Utc;
use contracts::enums::staff_role::StaffRole;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

use crate::shared::config::AuthConfig;

struct JwtSettings {
    secret: String,
    lifetime_hours: i64,
}

static JWT_SETTINGS: OnceCell<JwtSettings> = OnceCell::new();

/// Инициализация секрета и времени жизни токена из конфигурации
pub fn initialize(config: &AuthConfig) {
    let secret = match &config.jwt_secret {
        Some(secret) if !secret.trim().is_empty() => secret.clone(),
        _ => {
            tracing::warn!("auth.jwt_secret is not set, generated a random one for this run");
            generate_jwt_secret()
        }
    };
    let _ = JWT_SETTINGS.set(JwtSettings {
        secret,
        lifetime_hours: config.access_token_hours,
    });
}

fn settings() -> Result<&'static JwtSettings> {
    JWT_SETTINGS
        .get()
        .context("JWT settings are not initialized")
}

/// Generate JWT access token for a staff member
pub async fn generate_access_token(user_id: &str, username: &str, role: StaffRole) -> Result<String> {
    let settings = settings()?;
    let claims = build_claims(user_id, username, role, settings.lifetime_hours);
    encode_claims(&claims, &settings.secret)
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_claims(token, &settings()?.secret)
}

fn build_claims(user_id: &str, username: &str, role: StaffRole, lifetime_hours: i64) -> TokenClaims {
    let now = Utc::now();
    TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role,
        exp: (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}
