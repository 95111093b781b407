use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::middleware::request_id::RequestId;

/// Logs every 4xx (warn) and 5xx (error) response. The body is left
/// untouched; handlers already log the cause of internal errors.
pub async fn log_error_responses(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            method = %method,
            uri = %uri,
            latency_ms,
            request_id = %request_id,
            "Request completed with error status"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            status = status.as_u16(),
            method = %method,
            uri = %uri,
            latency_ms,
            request_id = %request_id,
            "Request completed with error status"
        );
    }

    response
}
