use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

const UNIQUE_VIOLATION: &str = "23505";

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0:#}")]
    InternalServerError(anyhow::Error),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl AppError {
    fn parts(self) -> (StatusCode, String, &'static str, Option<Value>) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND", None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED", None),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, "FORBIDDEN", None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, "CONFLICT", None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", None),
            AppError::InternalServerError(err) => {
                tracing::error!(error = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR",
                    None,
                )
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                "VALIDATION_ERROR",
                Some(serde_json::json!({ "errors": errors })),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code, details) = self.parts();
        let body = Json(ErrorResponse {
            error,
            code: code.to_string(),
            details,
        });
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                AppError::Conflict("Resource already exists".to_string())
            }
            _ => AppError::InternalServerError(err.into()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let text = e
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    // struct-level rules are reported without a field prefix
                    if field == "__all__" {
                        text
                    } else {
                        format!("{}: {}", field, text)
                    }
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn app_error_into_response_maps_status_and_code() {
        let cases = [
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            (AppError::Unauthorized("nope".into()), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (AppError::Forbidden("denied".into()), StatusCode::FORBIDDEN, "FORBIDDEN"),
            (AppError::Conflict("taken".into()), StatusCode::CONFLICT, "CONFLICT"),
            (AppError::NotFound("missing".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
        ];
        for (error, status, code) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            let json = response_json(response).await;
            assert_eq!(json["code"], code);
            assert!(json.get("details").is_none());
        }
    }

    #[tokio::test]
    async fn internal_errors_hide_the_cause() {
        let response =
            AppError::InternalServerError(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert!(!json.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn validation_errors_carry_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "reason",
            ValidationError::new("length").with_message("Reason must be at least 10 characters".into()),
        );
        errors.add("email", ValidationError::new("email"));

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        let messages = json["details"]["errors"].as_array().expect("errors array");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "email: email");
        assert_eq!(messages[1], "reason: Reason must be at least 10 characters");
    }

    #[test]
    fn app_errors_convert_into_anyhow() {
        fn lookup() -> anyhow::Result<()> {
            Err(AppError::Conflict("Email already registered".into()))?;
            Ok(())
        }
        let err = lookup().unwrap_err();
        assert_eq!(err.to_string(), "conflict: Email already registered");

        let err = AppError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation failed: a; b");
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            AppError::from(sqlx::Error::RowNotFound),
            AppError::NotFound(_)
        ));
    }
}
