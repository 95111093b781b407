use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::user::CurrentUser,
    state::AppState,
    utils::jwt::{verify_access_token, Claims},
};

const MISSING_TOKEN: &str = "Access token required";
const INVALID_TOKEN: &str = "Invalid or expired token";

pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate_request(request.headers(), &state)?;
    let user = claims.current_user();
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

// Auth + require admin role for admin-only routes
pub async fn auth_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate_request(request.headers(), &state)?;
    let user = claims.current_user();
    if !user.is_admin() {
        tracing::warn!(user_id = %user.id, "Non-admin caller rejected from admin route");
        return Err(AppError::Forbidden("Admin access required".into()));
    }

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<Claims, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN.into()))?;

    verify_access_token(token, &state.config.jwt_secret).map_err(|err| {
        tracing::debug!(error = %err, "Rejected access token");
        AppError::Unauthorized(INVALID_TOKEN.into())
    })
}

/// Identity extractor for handlers behind [`auth`] or [`auth_admin`].
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_token_ignores_scheme_case() {
        assert_eq!(parse_bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(parse_bearer_token("bearer abc.def"), Some("abc.def"));
        assert_eq!(parse_bearer_token("BEARER   abc.def "), Some("abc.def"));
    }

    #[test]
    fn parse_bearer_token_rejects_other_schemes() {
        assert_eq!(parse_bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer_token("Bearer"), None);
        assert_eq!(parse_bearer_token("Bearer   "), None);
        assert_eq!(parse_bearer_token(""), None);
    }
}
