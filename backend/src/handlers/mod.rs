pub mod admin;
pub mod extract;
pub mod auth;
pub mod leaves;

use crate::{error::AppError, types::LeaveId};

/// Parses the `{id}` path segment of leave routes.
pub(crate) fn parse_leave_id(raw: &str) -> Result<LeaveId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid leave ID".into()))
}
