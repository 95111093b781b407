use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::ApiError,
    config,
    utils::{navigation, storage},
};

/// Whether a call carries the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Bearer,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    fn bearer_token() -> Result<String, ApiError> {
        storage::load_token().ok_or_else(|| ApiError::unauthorized("Please sign in to continue"))
    }

    pub(crate) fn clear_session() {
        storage::clear_token();
    }

    pub(crate) fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
        access: Access,
    ) -> Result<T, ApiError> {
        // checked before the base URL so a signed-out call never touches the network
        let token = match access {
            Access::Bearer => Some(Self::bearer_token()?),
            Access::Public => None,
        };
        let base_url = self.resolved_base_url().await;
        let mut builder = self
            .client
            .request(method.clone(), format!("{}{}", base_url, path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;

        if status.is_success() {
            return serde_json::from_str(&text)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }

        if status == StatusCode::UNAUTHORIZED && access == Access::Bearer {
            Self::clear_session();
            navigation::redirect_to_login();
        }
        log::debug!("{} {} returned {}", method, path, status);
        Err(error_from_body(status.as_u16(), &text))
    }
}

/// Decodes a failed response, falling back to a generic message when the
/// body is not the backend's error shape.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    if let Ok(error) = serde_json::from_str::<ApiError>(body) {
        return error;
    }
    let code = match status {
        400 => "BAD_REQUEST",
        401 => "UNAUTHORIZED",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        409 => "CONFLICT",
        429 => "RATE_LIMITED",
        500..=599 => "INTERNAL_SERVER_ERROR",
        _ => "UNKNOWN",
    };
    ApiError {
        error: format!("Request failed with status {}", status),
        code: code.to_string(),
        details: None,
    }
}
