use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use validator::Validate;

use crate::types::{LeaveId, UserId};
use crate::validation::rules;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Leave {
    pub id: LeaveId,
    pub user_id: UserId,
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
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
    Paternity,
    Emergency,
}

impl LeaveType {
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
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "TEXT")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Outcome of asking for a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The leave already has the requested status.
    Unchanged,
    /// The change is legal and must be written.
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Cannot change a {from} leave to {to}")]
pub struct TransitionError {
    pub from: LeaveStatus,
    pub to: LeaveStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status filter {0:?}; expected all, Pending, Approved or Rejected")]
pub struct InvalidStatus(pub String);

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    /// Only pending leaves move, and only to a decision.
    pub fn transition_to(self, target: LeaveStatus) -> Result<Transition, TransitionError> {
        match (self, target) {
            (from, to) if from == to => Ok(Transition::Unchanged),
            (LeaveStatus::Pending, LeaveStatus::Approved | LeaveStatus::Rejected) => {
                Ok(Transition::Apply)
            }
            (from, to) => Err(TransitionError { from, to }),
        }
    }

    /// Parses the `status` query parameter; `all` and blank mean no filter.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<LeaveStatus>, InvalidStatus> {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(LeaveStatus::Pending),
            "Approved" => Ok(LeaveStatus::Approved),
            "Rejected" => Ok(LeaveStatus::Rejected),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// Body of `POST /api/apply-leave`. Also the merged shape an owner edit is
/// validated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "rules::validate_leave_dates"))]
pub struct CreateLeaveRequest {
    #[validate(custom(function = "rules::validate_employee_name"))]
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[validate(length(
        min = 10,
        max = 500,
        message = "Reason must be between 10 and 500 characters"
    ))]
    pub reason: String,
}

/// Partial body of `PUT /api/leaves/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateLeaveRequest {
    pub employee_name: Option<String>,
    pub leave_type: Option<LeaveType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
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

    /// Overlays the supplied fields on the stored leave.
    pub fn merge_onto(self, current: &Leave) -> CreateLeaveRequest {
        CreateLeaveRequest {
            employee_name: self
                .employee_name
                .unwrap_or_else(|| current.employee_name.clone()),
            leave_type: self.leave_type.unwrap_or(current.leave_type),
            from_date: self.from_date.unwrap_or(current.from_date),
            to_date: self.to_date.unwrap_or(current.to_date),
            reason: self.reason.unwrap_or_else(|| current.reason.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
/// Body of `PUT /api/leaves/{id}/status`.
pub struct UpdateLeaveStatusRequest {
    pub status: LeaveStatus,
}
