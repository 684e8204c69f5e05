//! API utilities for frontend-backend communication
//!
//! Все запросы идут через [`ApiClient`]: он создаётся один раз из сессии
//! (базовый URL + bearer-токен) и раздаётся через контекст Leptos.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Понятное сообщение для кода ответа бэкенда
pub fn describe_status(status: u16) -> String {
    match status {
        400 => "Request rejected: invalid data".to_string(),
        401 => "Session expired, please sign in again".to_string(),
        403 => "Not allowed for your role".to_string(),
        404 => "Not found".to_string(),
        409 => "Conflict: the record was changed or the action is not allowed".to_string(),
        s if s >= 500 => format!("Server error ({})", s),
        s => format!("Request failed ({})", s),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    /// Клиент для текущего окна браузера
    pub fn for_session(token: Option<String>) -> Self {
        Self::new(api_base(), token)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// GET без разбора ответа: вызывающий сам смотрит на код статуса
    pub async fn get(&self, path: &str) -> Result<Response, String> {
        self.authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self.get(path).await?;
        Self::read_json(response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let request = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        Self::read_json(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        Self::read_json(response).await
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        if !response.ok() {
            return Err(describe_status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// ApiClient из контекста (его кладёт MainLayout после входа)
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::for_session(None))
}
