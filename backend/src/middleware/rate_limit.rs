use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Response, StatusCode};
use governor::middleware::StateInformationMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorError,
    GovernorLayer,
};

use crate::config::Config;
use crate::error::ErrorResponse;

pub type AuthRateLimitLayer = GovernorLayer<PeerIpKeyExtractor, StateInformationMiddleware, Body>;

/// Per-IP limiter for the public login/register routes. Needs the server to
/// be started with connect info so the peer address is available.
pub fn create_auth_rate_limiter(config: &Config) -> anyhow::Result<AuthRateLimitLayer> {
    let burst_size = config.rate_limit_auth_burst.max(1);
    let window_seconds = config.rate_limit_auth_window_seconds.max(1);
    let governor_conf = GovernorConfigBuilder::default()
        .period(Duration::from_secs(window_seconds))
        .burst_size(burst_size)
        .key_extractor(PeerIpKeyExtractor)
        .use_headers()
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)).error_handler(rate_limit_error_handler))
}

fn rate_limit_error_handler(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::warn!(wait_time, "Auth rate limit exceeded");
            let mut response = json_error_response(
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Too many requests. Please try again later.",
                Some(wait_time),
            );
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => json_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "Unable to determine request identity.",
            None,
        ),
        GovernorError::Other { code, msg, headers } => {
            let mut response = json_error_response(
                code,
                "RATE_LIMITED",
                &msg.unwrap_or_else(|| "Rate limit error".to_string()),
                None,
            );
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}

fn json_error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    retry_after: Option<u64>,
) -> Response<Body> {
    let body = ErrorResponse {
        error: message.to_string(),
        code: code.to_string(),
        details: retry_after.map(|secs| serde_json::json!({ "retry_after": secs })),
    };
    let payload = serde_json::to_vec(&body).unwrap_or_default();

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(retry_after) = retry_after {
        if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
            response.headers_mut().insert("retry-after", value);
        }
    }
    response
}
