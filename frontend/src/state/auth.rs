use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest, UserResponse},
    pages::login::repository::LoginRepository,
    utils::{navigation, storage},
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

fn create_auth_context() -> AuthContext {
    // Without a stored token there is no session to restore.
    let has_token = storage::load_token().is_some();
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: has_token,
        ..AuthState::default()
    });

    if has_token {
        let api_client = use_context::<ApiClient>().unwrap_or_default();
        spawn_local(async move {
            match api_client.get_me().await {
                Ok(user) => set_auth_state.set(AuthState::signed_in(user)),
                Err(err) => {
                    log::info!("session not restored: {}", err);
                    set_auth_state.set(AuthState::signed_out());
                }
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);
    match repo.login(&request).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn register_request(
    request: RegisterRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);
    match repo.register(&request).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::signed_out());
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, set_auth).await }
    })
}

/// Clears the session and returns to the login page.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();
    Callback::new(move |_| {
        logout(&repo, set_auth);
        navigation::redirect_to(navigation::LOGIN_PATH);
    })
}
