use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::storage::window;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const ENV_GLOBAL: &str = "__LEAVE_MANAGER_ENV";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn get_from_env_js() -> Option<String> {
    // Optional global: window.__LEAVE_MANAGER_ENV = { API_BASE_URL: "..." }
    let w = window().ok()?;
    let any = js_sys::Reflect::get(&w, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

fn config_json_url() -> Option<String> {
    let origin = window().ok()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = config_json_url()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Trims whitespace and trailing slashes; blank input yields `None`.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: String) -> String {
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(url) = get_from_env_js().as_deref().and_then(normalize_base_url) {
        return cache_base_url(url);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .as_deref()
        .and_then(normalize_base_url)
    {
        return cache_base_url(url);
    }
    cache_base_url(DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://leave.example.com/api/ "),
            Some("https://leave.example.com/api".to_string())
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn runtime_config_parses_optional_url() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"http://api.local/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://api.local/api"));
    }
}
