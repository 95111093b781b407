use crate::api::{
    ApiError, CreateLeaveRequest, Leave, LeaveType, StatusFilter, UpdateLeaveRequest,
    UserResponse,
};
use chrono::NaiveDate;
use leptos::*;

pub const REASON_MIN_CHARS: usize = 10;
pub const REASON_MAX_CHARS: usize = 500;
pub const EMPLOYEE_NAME_MAX_CHARS: usize = 255;

/// Raw form input, validated the same way the server validates it.
pub fn validate_leave_input(
    employee_name: &str,
    leave_type: &str,
    from_date: &str,
    to_date: &str,
    reason: &str,
) -> Result<CreateLeaveRequest, ApiError> {
    let employee_name = employee_name.trim();
    if employee_name.is_empty() {
        return Err(ApiError::validation("Employee name is required"));
    }
    if employee_name.chars().count() > EMPLOYEE_NAME_MAX_CHARS {
        return Err(ApiError::validation(
            "Employee name must be at most 255 characters",
        ));
    }
    let leave_type = LeaveType::parse(leave_type)
        .ok_or_else(|| ApiError::validation("Please choose a leave type"))?;
    let from = parse_date(from_date, "From date is required")?;
    let to = parse_date(to_date, "To date is required")?;
    if to < from {
        return Err(ApiError::validation("To date must be on or after from date"));
    }
    let reason = reason.trim();
    let reason_len = reason.chars().count();
    if !(REASON_MIN_CHARS..=REASON_MAX_CHARS).contains(&reason_len) {
        return Err(ApiError::validation(
            "Reason must be between 10 and 500 characters",
        ));
    }
    Ok(CreateLeaveRequest {
        employee_name: employee_name.to_string(),
        leave_type,
        from_date: from,
        to_date: to,
        reason: reason.to_string(),
    })
}

fn parse_date(input: &str, err: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ApiError::validation(err))
}

/// Fields of `payload` that differ from the stored leave.
pub fn diff_leave(current: &Leave, payload: CreateLeaveRequest) -> UpdateLeaveRequest {
    UpdateLeaveRequest {
        employee_name: (payload.employee_name != current.employee_name)
            .then_some(payload.employee_name),
        leave_type: (payload.leave_type != current.leave_type).then_some(payload.leave_type),
        from_date: (payload.from_date != current.from_date).then_some(payload.from_date),
        to_date: (payload.to_date != current.to_date).then_some(payload.to_date),
        reason: (payload.reason != current.reason).then_some(payload.reason),
    }
}

/// Only the owner may edit, and only while the leave is pending.
pub fn can_edit(leave: &Leave, user: Option<&UserResponse>) -> bool {
    leave.is_pending() && user.map(|u| u.id == leave.user_id).unwrap_or(false)
}

pub fn format_date_range(from: NaiveDate, to: NaiveDate) -> String {
    if from == to {
        from.format("%b %d, %Y").to_string()
    } else {
        format!("{} - {}", from.format("%b %d, %Y"), to.format("%b %d, %Y"))
    }
}

/// Inclusive day count of a leave.
pub fn leave_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

pub fn page_label(current_page: i64, total_pages: i64) -> String {
    format!("Page {} of {}", current_page.max(1), total_pages.max(1))
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    employee_name: RwSignal<String>,
    leave_type: RwSignal<String>,
    from_date: RwSignal<String>,
    to_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            employee_name: create_rw_signal(String::new()),
            leave_type: create_rw_signal(LeaveType::Annual.as_str().to_string()),
            from_date: create_rw_signal(String::new()),
            to_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn employee_name_signal(&self) -> RwSignal<String> {
        self.employee_name
    }

    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn from_signal(&self) -> RwSignal<String> {
        self.from_date
    }

    pub fn to_signal(&self) -> RwSignal<String> {
        self.to_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reason_length(&self) -> usize {
        self.reason.with(|reason| reason.trim().chars().count())
    }

    pub fn reset(&self) {
        self.employee_name.set(String::new());
        self.leave_type.set(LeaveType::Annual.as_str().to_string());
        self.from_date.set(String::new());
        self.to_date.set(String::new());
        self.reason.set(String::new());
    }

    pub fn load_from_leave(&self, leave: &Leave) {
        self.employee_name.set(leave.employee_name.clone());
        self.leave_type.set(leave.leave_type.as_str().to_string());
        self.from_date.set(leave.from_date.format("%Y-%m-%d").to_string());
        self.to_date.set(leave.to_date.format("%Y-%m-%d").to_string());
        self.reason.set(leave.reason.clone());
    }

    pub fn to_payload(&self) -> Result<CreateLeaveRequest, ApiError> {
        validate_leave_input(
            &self.employee_name.get_untracked(),
            &self.leave_type.get_untracked(),
            &self.from_date.get_untracked(),
            &self.to_date.get_untracked(),
            &self.reason.get_untracked(),
        )
    }

    pub fn to_changes(&self, current: &Leave) -> Result<UpdateLeaveRequest, ApiError> {
        let changes = diff_leave(current, self.to_payload()?);
        if changes.is_empty() {
            return Err(ApiError::validation("No changes to save"));
        }
        Ok(changes)
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Status filter and page of the records table.
#[derive(Clone, Copy)]
pub struct RecordsFilterState {
    status: RwSignal<StatusFilter>,
    page: RwSignal<i64>,
}

impl Default for RecordsFilterState {
    fn default() -> Self {
        Self {
            status: create_rw_signal(StatusFilter::All),
            page: create_rw_signal(1),
        }
    }
}

impl RecordsFilterState {
    pub fn status_signal(&self) -> RwSignal<StatusFilter> {
        self.status
    }

    pub fn page_signal(&self) -> RwSignal<i64> {
        self.page
    }

    /// A new filter always starts from the first page.
    pub fn set_status(&self, status: StatusFilter) {
        self.status.set(status);
        self.page.set(1);
    }

    pub fn previous_page(&self) {
        self.page.update(|page| *page = (*page - 1).max(1));
    }

    pub fn next_page(&self, total_pages: i64) {
        self.page.update(|page| {
            if *page < total_pages {
                *page += 1;
            }
        });
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::test_support::helpers::sample_leave;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_round_trips_a_leave() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            let leave = sample_leave(5, LeaveStatus::Pending);
            state.load_from_leave(&leave);
            assert_eq!(state.from_signal().get(), "2024-07-10");
            assert_eq!(state.to_changes(&leave).unwrap_err().error, "No changes to save");

            state.reason_signal().set("Extended family trip to Goa".into());
            let changes = state.to_changes(&leave).unwrap();
            assert_eq!(changes.reason.as_deref(), Some("Extended family trip to Goa"));

            state.reset();
            assert!(state.employee_name_signal().get().is_empty());
            assert_eq!(state.leave_type_signal().get(), "Annual");
            assert_eq!(state.reason_length(), 0);
        });
    }

    #[test]
    fn filter_resets_page_and_bounds_navigation() {
        with_runtime(|| {
            let filter = RecordsFilterState::default();
            filter.next_page(3);
            filter.next_page(3);
            filter.next_page(3);
            assert_eq!(filter.page_signal().get(), 3);
            filter.set_status(StatusFilter::Only(LeaveStatus::Approved));
            assert_eq!(filter.page_signal().get(), 1);
            filter.previous_page();
            assert_eq!(filter.page_signal().get(), 1);
        });
    }
}
