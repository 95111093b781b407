use axum::{
    body::Body,
    extract::connect_info::MockConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tower::ServiceExt;

use leave_manager_backend::{app::build_router, config::Config, state::AppState};

fn limited_app(burst: u32) -> Router {
    let config = Config {
        database_url: "postgres://localhost/unused".to_string(),
        db_max_connections: 1,
        jwt_secret: "secret".to_string(),
        jwt_expiration_hours: 1,
        server_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow_origins: vec!["*".to_string()],
        rate_limit_enabled: true,
        rate_limit_auth_burst: burst,
        rate_limit_auth_window_seconds: 60,
    };
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database_url)
        .expect("create lazy pool");
    build_router(AppState::new(pool, config))
        .expect("build router")
        .layer(MockConnectInfo(SocketAddr::from(([10, 0, 0, 7], 40000))))
}

fn invalid_login() -> Request<Body> {
    // fails validation before any database access
    Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "email": "not-an-email", "password": "123" }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn login_is_limited_per_ip_after_burst() {
    let app = limited_app(2);

    for _ in 0..2 {
        let response = app.clone().oneshot(invalid_login()).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = app.clone().oneshot(invalid_login()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn protected_routes_are_not_rate_limited() {
    let app = limited_app(1);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/leaves")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
