use crate::api::{ApiError, LoginRequest, RegisterRequest};
use leptos::*;

pub const PASSWORD_MIN_CHARS: usize = 6;
pub const USERNAME_MIN_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginTab {
    #[default]
    SignIn,
    Register,
}

impl LoginTab {
    pub fn label(&self) -> &'static str {
        match self {
            LoginTab::SignIn => "Sign In",
            LoginTab::Register => "Register",
        }
    }
}

fn check_email(email: &str) -> Result<String, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    let valid = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !valid {
        return Err(ApiError::validation("Invalid email format"));
    }
    Ok(email.to_string())
}

fn check_password(password: &str) -> Result<(), ApiError> {
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ApiError::validation(
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = check_email(email)?;
    check_password(password)?;
    Ok(LoginRequest {
        email,
        password: password.to_string(),
    })
}

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, ApiError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if username.chars().count() < USERNAME_MIN_CHARS {
        return Err(ApiError::validation(
            "Username must be at least 3 characters",
        ));
    }
    let email = check_email(email)?;
    check_password(password)?;
    Ok(RegisterRequest {
        username: username.to_string(),
        email,
        password: password.to_string(),
        role: None,
    })
}

#[derive(Clone, Copy)]
pub struct CredentialsFormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for CredentialsFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl CredentialsFormState {
    pub fn login_payload(&self) -> Result<LoginRequest, ApiError> {
        validate_login(&self.email.get_untracked(), &self.password.get_untracked())
    }

    pub fn register_payload(&self) -> Result<RegisterRequest, ApiError> {
        validate_registration(
            &self.username.get_untracked(),
            &self.email.get_untracked(),
            &self.password.get_untracked(),
        )
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_email_and_password() {
        assert_eq!(validate_login("", "secret1").unwrap_err().error, "Email is required");
        assert_eq!(
            validate_login("priya", "secret1").unwrap_err().error,
            "Invalid email format"
        );
        assert_eq!(
            validate_login("priya@company.com", "12345").unwrap_err().error,
            "Password must be at least 6 characters"
        );
        let ok = validate_login(" priya@company.com ", "secret1").unwrap();
        assert_eq!(ok.email, "priya@company.com");
    }

    #[test]
    fn registration_checks_username_first() {
        assert_eq!(
            validate_registration("pr", "priya@company.com", "secret1")
                .unwrap_err()
                .error,
            "Username must be at least 3 characters"
        );
        let ok = validate_registration("priya_sharma", "priya@company.com", "secret1").unwrap();
        assert_eq!(ok.username, "priya_sharma");
        assert!(ok.role.is_none());
    }

    #[test]
    fn tab_labels() {
        assert_eq!(LoginTab::default(), LoginTab::SignIn);
        assert_eq!(LoginTab::Register.label(), "Register");
    }
}
