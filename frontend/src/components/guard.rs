use crate::{
    api::UserResponse,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session restore in flight.
    Checking,
    Granted,
    /// Signed out; send to the login page.
    SignIn,
    /// Signed in but not allowed here.
    Denied,
}

pub fn access_for(state: &AuthState, admin_only: bool) -> Access {
    if state.loading {
        Access::Checking
    } else if !state.is_authenticated {
        Access::SignIn
    } else if admin_only && !is_admin_user(state.user.as_ref()) {
        Access::Denied
    } else {
        Access::Granted
    }
}

pub fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(|u| u.is_admin()).unwrap_or(false)
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let access = create_memo(move |_| access_for(&auth.get(), false));
    create_effect(move |_| {
        if access.get() == Access::SignIn {
            navigation::redirect_to_login();
        }
    });
    view! {
        <Show
            when=move || access.get() == Access::Granted
            fallback=move || match access.get() {
                Access::Checking => view! { <LoadingSpinner /> }.into_view(),
                _ => ().into_view(),
            }
        >
            {children()}
        </Show>
    }
}

/// Admin-only content inside an already protected page. Non-admins get
/// nothing rendered and stay where they are.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let access = create_memo(move |_| access_for(&auth.get(), true));
    view! {
        <Show when=move || access.get() == Access::Granted>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};

    #[test]
    fn restoring_session_is_checking() {
        let state = AuthState {
            loading: true,
            ..AuthState::default()
        };
        assert_eq!(access_for(&state, false), Access::Checking);
        assert_eq!(access_for(&state, true), Access::Checking);
    }

    #[test]
    fn signed_out_users_go_to_sign_in() {
        assert_eq!(access_for(&AuthState::signed_out(), false), Access::SignIn);
        assert_eq!(access_for(&AuthState::signed_out(), true), Access::SignIn);
    }

    #[test]
    fn admin_only_content_checks_role() {
        let employee = AuthState::signed_in(regular_user());
        let admin = AuthState::signed_in(admin_user());
        assert_eq!(access_for(&employee, false), Access::Granted);
        assert_eq!(access_for(&employee, true), Access::Denied);
        assert_eq!(access_for(&admin, true), Access::Granted);
        assert!(!is_admin_user(None));
    }
}
