use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_manager_backend::{
    app::build_router,
    config::Config,
    db::connection::{create_pool, run_migrations},
    state::AppState,
};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

/// Hides the password part of a connection URL.
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.split_once(':') {
                Some((user, _)) => format!("{}{}:***{}", &url[..scheme_end + 3], user, &url[at..]),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leave_manager_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %mask_database_url(&config.database_url),
        db_max_connections = config.db_max_connections,
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        cors_allow_origins = ?config.cors_allow_origins,
        rate_limit_enabled = config.rate_limit_enabled,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    let addr = config.server_addr;
    let app = build_router(AppState::new(pool, config))?;

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_secret_keeps_prefix_only() {
        assert_eq!(mask_secret(""), "<empty>");
        assert_eq!(mask_secret("supersecret"), "supe*** (len=11)");
    }

    #[test]
    fn mask_database_url_hides_password() {
        assert_eq!(
            mask_database_url("postgres://app:s3cret@db:5432/leaves"),
            "postgres://app:***@db:5432/leaves"
        );
        assert_eq!(
            mask_database_url("postgres://app@db:5432/leaves"),
            "postgres://app@db:5432/leaves"
        );
    }
}
