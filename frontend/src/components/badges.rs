use crate::api::{LeaveStatus, LeaveType};
use leptos::*;

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

pub fn leave_type_label(kind: LeaveType) -> String {
    format!("{} Leave", kind.as_str())
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
            status_badge_class(status),
        )>
            {status.as_str()}
        </span>
    }
}

#[component]
pub fn LeaveTypeBadge(kind: LeaveType) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium bg-surface-muted text-fg">
            {leave_type_label(kind)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_color() {
        assert!(status_badge_class(LeaveStatus::Pending).contains("warning"));
        assert!(status_badge_class(LeaveStatus::Approved).contains("success"));
        assert!(status_badge_class(LeaveStatus::Rejected).contains("error"));
    }

    #[test]
    fn leave_type_label_appends_leave() {
        assert_eq!(leave_type_label(LeaveType::Maternity), "Maternity Leave");
    }
}
