#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Leave, LeaveStatus, LeaveType, UserResponse, UserRole};
    use crate::state::auth::AuthState;
    use chrono::{NaiveDate, TimeZone, Utc};
    use leptos::*;

    fn user(id: i64, username: &str, email: &str, role: UserRole) -> UserResponse {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        UserResponse {
            id,
            username: username.into(),
            email: email.into(),
            role,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn admin_user() -> UserResponse {
        user(1, "rajesh_kumar", "rajesh.kumar@company.com", UserRole::Admin)
    }

    pub fn regular_user() -> UserResponse {
        user(2, "priya_sharma", "priya.sharma@company.com", UserRole::Employee)
    }

    pub fn sample_leave(id: i64, status: LeaveStatus) -> Leave {
        let at = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
        Leave {
            id,
            user_id: 2,
            employee_name: "Priya Sharma".into(),
            leave_type: LeaveType::Annual,
            from_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            reason: "Family trip to Goa for a week".into(),
            status,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let state = match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
