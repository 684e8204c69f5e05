use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет через `tracing` (консоль и `logs/backend.log`) длительность, размер ответа,
/// статус, метод и путь. Ответы с ошибкой пишутся уровнем `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | {:>9} | {} {:>6} {} | body read failed: {}",
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format_request_line(
        start.elapsed().as_millis(),
        bytes.len(),
        parts.status.as_u16(),
        method.as_str(),
        uri.path(),
    );
    if parts.status.is_client_error() || parts.status.is_server_error() {
        tracing::warn!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn format_request_line(millis: u128, size: usize, status: u16, method: &str, path: &str) -> String {
    format!(
        "{:>5}ms | {:>9} | {} {:>6} {}",
        millis,
        format_size(size),
        status,
        method,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_request_line() {
        let line = format_request_line(12, 0, 409, "PATCH", "/api/orders/1/status");
        assert!(line.starts_with("   12ms |"));
        assert!(line.ends_with("409  PATCH /api/orders/1/status"));
        assert!(!line.contains('\x1b'));
    }
}
