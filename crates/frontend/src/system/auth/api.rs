use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{describe_status, ApiClient};

/// Login with username and password
pub async fn login(base: &str, username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/system/auth/login", base))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        401 => return Err("Wrong username or password".to_string()),
        s if !response.ok() => return Err(describe_status(s)),
        _ => {}
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Почему не удалось подтвердить сохранённую сессию
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheckError {
    /// Бэкенд отверг токен (401), сессию нужно забыть
    Rejected,
    /// Сеть или сервер недоступны, сессия остаётся
    Unavailable(String),
}

impl SessionCheckError {
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            SessionCheckError::Rejected
        } else {
            SessionCheckError::Unavailable(describe_status(status))
        }
    }

    pub fn should_clear_session(&self) -> bool {
        matches!(self, SessionCheckError::Rejected)
    }
}

impl std::fmt::Display for SessionCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCheckError::Rejected => write!(f, "{}", describe_status(401)),
            SessionCheckError::Unavailable(reason) => write!(f, "{}", reason),
        }
    }
}

/// Get current user info (проверка сохранённого токена)
pub async fn get_current_user(api: &ApiClient) -> Result<UserInfo, SessionCheckError> {
    let response = api
        .get("/api/system/auth/me")
        .await
        .map_err(SessionCheckError::Unavailable)?;
    if !response.ok() {
        return Err(SessionCheckError::from_status(response.status()));
    }
    ApiClient::read_json(response)
        .await
        .map_err(SessionCheckError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unauthorized_clears_session() {
        assert!(SessionCheckError::from_status(401).should_clear_session());
        assert!(!SessionCheckError::from_status(502).should_clear_session());
        assert!(!SessionCheckError::from_status(403).should_clear_session());
        assert!(!SessionCheckError::Unavailable("Failed to send request".into()).should_clear_session());
    }

    #[test]
    fn test_unavailable_keeps_reason() {
        assert_eq!(
            SessionCheckError::from_status(503).to_string(),
            "Server error (503)"
        );
    }
}
