//! Common validation rules shared across request payloads.

use std::borrow::Cow;

use validator::ValidationError;

use crate::models::leave::CreateLeaveRequest;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Validates username format.
///
/// Requirements:
/// - 3-100 characters in length
/// - Only alphanumeric characters, underscores, dots and hyphens
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if !(3..=100).contains(&len) {
        return Err(error(
            "username_invalid_length",
            "Username must be between 3 and 100 characters",
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(error(
            "username_invalid_characters",
            "Username may only contain letters, digits, '_', '.' and '-'",
        ));
    }

    Ok(())
}

/// Emails are stored and looked up lowercased, so `A@x.com` and `a@x.com`
/// are one account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Employee name must contain something other than whitespace.
pub fn validate_employee_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(error("required", "Employee name is required"));
    }
    if trimmed.chars().count() > 255 {
        return Err(error(
            "employee_name_too_long",
            "Employee name must be at most 255 characters",
        ));
    }
    Ok(())
}

/// A leave may end on the day it starts but never before.
pub fn validate_leave_dates(req: &CreateLeaveRequest) -> Result<(), ValidationError> {
    if req.to_date < req.from_date {
        return Err(error(
            "date_order",
            "To date must be on or after from date",
        ));
    }
    Ok(())
}
