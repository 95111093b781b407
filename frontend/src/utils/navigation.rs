use super::storage::window;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

pub fn current_path() -> Option<String> {
    window().ok()?.location().pathname().ok()
}

pub fn redirect_to(path: &str) {
    if let Ok(win) = window() {
        let _ = win.location().set_href(path);
    }
}

/// Sends the browser to the login page unless it is already there.
pub fn redirect_to_login() {
    if current_path().as_deref() == Some(LOGIN_PATH) {
        return;
    }
    redirect_to(LOGIN_PATH);
}
