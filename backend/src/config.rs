use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub server_addr: SocketAddr,
    pub cors_allow_origins: Vec<String>,
    pub rate_limit_enabled: bool,
    pub rate_limit_auth_burst: u32,
    pub rate_limit_auth_window_seconds: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(database_url_from_parts);

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = parse_env("PORT", 3000);
        let server_addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|_| anyhow!("Invalid SERVER_HOST/PORT value: {}:{}", host, port))?;

        Ok(Config {
            database_url,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10u32).max(1),
            jwt_secret,
            jwt_expiration_hours: parse_env("JWT_EXPIRES_IN_HOURS", 24),
            server_addr,
            cors_allow_origins: parse_origins(env::var("CORS_ALLOW_ORIGINS").ok()),
            rate_limit_enabled: parse_env("RATE_LIMIT_ENABLED", true),
            rate_limit_auth_burst: parse_env("RATE_LIMIT_AUTH_BURST", 10),
            rate_limit_auth_window_seconds: parse_env("RATE_LIMIT_AUTH_WINDOW_SECONDS", 60),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

fn database_url_from_parts() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_default();
    let name = env::var("DB_NAME").unwrap_or_else(|_| "leave_management".to_string());
    build_database_url(&host, &port, &user, &password, &name)
}

fn build_database_url(host: &str, port: &str, user: &str, password: &str, name: &str) -> String {
    if password.is_empty() {
        format!("postgres://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();
    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
