use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RequireAuth,
    pages::{HomePage, LoginPage, NotFoundPage},
    state::auth::AuthProvider,
    utils::navigation::{HOME_PATH, LOGIN_PATH},
};

pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[HOME_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[LOGIN_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=HOME_PATH view=ProtectedHome/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireAuth><HomePage/></RequireAuth> }
}
