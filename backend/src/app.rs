use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    docs::ApiDoc,
    handlers,
    middleware::{self as app_middleware, create_auth_rate_limiter},
    state::AppState,
};

/// Full application router, shared by `main` and the integration tests.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    // Build public routes (no auth)
    let mut public_routes = Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route("/api/register", post(handlers::auth::register));
    if state.config.rate_limit_enabled {
        public_routes = public_routes.layer(create_auth_rate_limiter(&state.config)?);
    }

    // Build user-protected routes (auth required)
    let user_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/apply-leave", post(handlers::leaves::apply_leave))
        .route("/api/leaves", get(handlers::leaves::list_leaves))
        .route(
            "/api/leaves/{id}",
            get(handlers::leaves::get_leave).put(handlers::leaves::update_leave),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            app_middleware::auth,
        ));

    // Build admin-protected routes (auth + admin role)
    let admin_routes = Router::new()
        .route(
            "/api/leaves/{id}/approve",
            put(handlers::admin::approve_leave),
        )
        .route(
            "/api/leaves/{id}/reject",
            put(handlers::admin::reject_leave),
        )
        .route(
            "/api/leaves/{id}/status",
            put(handlers::admin::set_leave_status),
        )
        .route(
            "/api/admin/leaves/pending",
            get(handlers::admin::list_pending_leaves),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            app_middleware::auth_admin,
        ));

    let cors = cors_layer(&state.config);

    let app = Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(app_middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(app_middleware::log_error_responses))
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allow_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(24 * 60 * 60))
}
