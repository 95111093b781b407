use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    FromRequest, FromRequestParts,
};

use crate::error::AppError;

/// `Json` whose rejections use the app's error body instead of axum's
/// plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let text = err.body_text();
                let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(&text);
                AppError::Validation(vec![describe_field_error(detail)])
            }
            JsonRejection::JsonSyntaxError(_) => {
                AppError::BadRequest("Request body is not valid JSON".into())
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Expected a JSON request body".into())
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Query string rejected");
        AppError::BadRequest("Invalid query parameters".into())
    }
}

/// `field: message` for a body that parsed as JSON but not as the request type.
fn describe_field_error(detail: &str) -> String {
    let Some((field, cause)) = detail.split_once(": ") else {
        return strip_position(detail).to_string();
    };
    if cause.starts_with("unknown variant") {
        let label = match field {
            "leave_type" => "Invalid leave type",
            "status" => "Invalid status",
            "role" => "Invalid role",
            _ => "Invalid value",
        };
        return format!("{}: {}", field, label);
    }
    if cause.contains("input contains invalid characters")
        || cause.contains("premature end of input")
        || cause.contains("input is out of range")
        || cause.contains("trailing input")
    {
        return format!("{}: Invalid date, expected YYYY-MM-DD", field);
    }
    format!("{}: {}", field, strip_position(cause))
}

fn strip_position(cause: &str) -> &str {
    cause
        .rsplit_once(" at line ")
        .map(|(message, _)| message)
        .unwrap_or(cause)
}
