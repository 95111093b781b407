use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Employee,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Body returned by login and register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Personal,
    Maternity,
    Paternity,
    Emergency,
}

impl LeaveType {
    pub const ALL: [LeaveType; 6] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Maternity,
        LeaveType::Paternity,
        LeaveType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Personal => "Personal",
            LeaveType::Maternity => "Maternity",
            LeaveType::Paternity => "Paternity",
            LeaveType::Emergency => "Emergency",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ApiError::validation(format!("Unknown leave status: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: i64,
    pub user_id: i64,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Leave {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
}

/// Partial edit; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLeaveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<LeaveType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl UpdateLeaveRequest {
    pub fn is_empty(&self) -> bool {
        self.employee_name.is_none()
            && self.leave_type.is_none()
            && self.from_date.is_none()
            && self.to_date.is_none()
            && self.reason.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePage {
    pub leaves: Vec<Leave>,
    pub total_count: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub limit: i64,
}

impl LeavePage {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeaveStatus),
}

impl StatusFilter {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown select values fall back to `All`.
    pub fn from_select(value: &str) -> Self {
        value
            .parse::<LeaveStatus>()
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }
}

/// Query string of `GET /leaves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveQuery {
    pub page: i64,
    pub limit: i64,
    pub status: StatusFilter,
}

impl Default for LeaveQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: StatusFilter::All,
        }
    }
}

impl LeaveQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.max(1).to_string()),
            ("limit", self.limit.clamp(1, 100).to_string()),
            ("status", self.status.as_query_value().to_string()),
        ]
    }
}

/// Error body sent by the backend, also used for client-side failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    /// Field-level messages from a `VALIDATION_ERROR` body.
    pub fn field_messages(&self) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|details| details.get("errors"))
            .and_then(|errors| errors.as_array())
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|err| err.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
