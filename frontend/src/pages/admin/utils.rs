use serde::{Deserialize, Serialize};

use crate::api::{Leave, LeavePage, LeaveStatus};

/// How many decided leaves each history section shows.
pub const RECENT_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }

    pub fn target_status(&self) -> LeaveStatus {
        match self {
            Decision::Approve => LeaveStatus::Approved,
            Decision::Reject => LeaveStatus::Rejected,
        }
    }

    pub fn confirm_title(&self) -> String {
        format!("{} Leave Request", self.label())
    }

    pub fn confirm_message(&self, leave: &Leave) -> String {
        format!(
            "Are you sure you want to {} this leave request from {}?",
            self.label().to_lowercase(),
            leave.employee_name
        )
    }

    pub fn success_message(&self, leave: &Leave) -> String {
        format!(
            "Leave request from {} {}.",
            leave.employee_name,
            self.target_status().as_str().to_lowercase()
        )
    }
}

/// A decision the admin picked but has not confirmed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDecision {
    pub leave: Leave,
    pub decision: Decision,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

impl AdminStats {
    pub fn total(&self) -> i64 {
        self.pending + self.approved + self.rejected
    }
}

/// Loaded through a resource, so it must be serializable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub pending: Vec<Leave>,
    pub recent_approved: Vec<Leave>,
    pub recent_rejected: Vec<Leave>,
    pub stats: AdminStats,
}

impl AdminOverview {
    pub fn from_parts(pending: Vec<Leave>, approved: LeavePage, rejected: LeavePage) -> Self {
        let stats = AdminStats {
            pending: pending.len() as i64,
            approved: approved.total_count,
            rejected: rejected.total_count,
        };
        Self {
            pending,
            recent_approved: approved.leaves,
            recent_rejected: rejected.leaves,
            stats,
        }
    }
}
