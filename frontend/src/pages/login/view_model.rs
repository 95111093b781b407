use super::utils::{CredentialsFormState, LoginTab};
use crate::api::{ApiError, LoginRequest, RegisterRequest};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub tab: RwSignal<LoginTab>,
    pub form: CredentialsFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

fn apply_auth_result(
    result: Option<Result<(), ApiError>>,
    form: CredentialsFormState,
    error: RwSignal<Option<ApiError>>,
) {
    match result {
        Some(Ok(())) => {
            error.set(None);
            form.clear_password();
            navigation::redirect_to(navigation::HOME_PATH);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let tab = create_rw_signal(LoginTab::default());
    let form = CredentialsFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let register_action = auth::use_register_action();

    create_effect(move |_| apply_auth_result(login_action.value().get(), form, error));
    create_effect(move |_| apply_auth_result(register_action.value().get(), form, error));

    LoginViewModel {
        tab,
        form,
        error,
        login_action,
        register_action,
    }
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        let login = self.login_action.pending();
        let register = self.register_action.pending();
        Signal::derive(move || login.get() || register.get())
    }

    pub fn switch_tab(&self, tab: LoginTab) {
        self.tab.set(tab);
        self.error.set(None);
    }

    pub fn submit(&self) {
        if self.pending().get_untracked() {
            return;
        }
        let result = match self.tab.get_untracked() {
            LoginTab::SignIn => self
                .form
                .login_payload()
                .map(|payload| self.login_action.dispatch(payload)),
            LoginTab::Register => self
                .form
                .register_payload()
                .map(|payload| self.register_action.dispatch(payload)),
        };
        match result {
            Ok(()) => self.error.set(None),
            Err(err) => self.error.set(Some(err)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn starts_on_sign_in_without_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert_eq!(vm.tab.get(), LoginTab::SignIn);
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
        });
    }

    #[test]
    fn invalid_input_sets_error_without_dispatch() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.email.set("not-an-email".into());
            vm.form.password.set("secret1".into());
            vm.submit();
            assert_eq!(vm.error.get().unwrap().error, "Invalid email format");
            assert!(vm.login_action.value().get().is_none());

            vm.switch_tab(LoginTab::Register);
            assert!(vm.error.get().is_none());
            vm.submit();
            assert_eq!(vm.error.get().unwrap().error, "Username is required");
        });
    }

    #[test]
    fn failed_result_keeps_user_on_page() {
        with_runtime(|| {
            let form = CredentialsFormState::default();
            form.password.set("secret1".into());
            let error = create_rw_signal(None::<ApiError>);
            apply_auth_result(
                Some(Err(ApiError::unauthorized("Invalid credentials"))),
                form,
                error,
            );
            assert_eq!(error.get().unwrap().error, "Invalid credentials");
            assert_eq!(form.password.get(), "secret1");
        });
    }
}
