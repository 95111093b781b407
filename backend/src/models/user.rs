//! Models that represent users, authentication payloads, and role metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::UserId;
use crate::validation::rules;

/// Database representation of a user account.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; never leaves the backend.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema, Default)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
/// Roles stored in `users.role`.
pub enum UserRole {
    /// Self-service access to one's own leaves.
    #[default]
    Employee,
    /// Approval authority over every leave.
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "employee" => Some(UserRole::Employee),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserRole::parse(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["employee", "admin"]))
    }
}

/// Identity of the caller, rebuilt from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
/// Credentials submitted to `POST /api/login`.
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
/// Payload accepted by `POST /api/register`.
pub struct RegisterRequest {
    #[validate(custom(function = "rules::validate_username"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Defaults to `employee` when omitted.
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Fields required to insert a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Public-facing representation of a user.
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Returned by login and register.
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_user(role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(3),
            username: "priya_sharma".into(),
            email: "priya.sharma@company.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn user_role_serde_uses_lowercase() {
        let e: UserRole = serde_json::from_str("\"employee\"").unwrap();
        let a: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(e, UserRole::Employee);
        assert_eq!(a, UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>("\"manager\"").is_err());

        assert_eq!(
            serde_json::to_value(UserRole::Admin).unwrap(),
            Value::String("admin".into())
        );
    }

    #[test]
    fn user_response_never_contains_password_hash() {
        let resp: UserResponse = sample_user(UserRole::Employee).into();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["role"], "employee");
        assert_eq!(json["id"], 3);
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("argon2"));
    }

    #[test]
    fn register_request_validates_fields() {
        let ok: RegisterRequest = serde_json::from_value(json!({
            "username": "arjun_patel",
            "email": "arjun.patel@company.com",
            "password": "secret1"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
        assert!(ok.role.is_none());

        let bad = RegisterRequest {
            username: "ab".into(),
            email: "not-an-email".into(),
            password: "123".into(),
            role: Some(UserRole::Admin),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn login_request_requires_email_and_password_length() {
        let req = LoginRequest {
            email: "rajesh.kumar@company.com".into(),
            password: "admin123".into(),
        };
        assert!(req.validate().is_ok());

        let short = LoginRequest {
            email: "rajesh.kumar@company.com".into(),
            password: "12345".into(),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn current_user_mirrors_role() {
        let admin = CurrentUser::from(&sample_user(UserRole::Admin));
        assert!(admin.is_admin());
        let employee = CurrentUser::from(&sample_user(UserRole::Employee));
        assert!(!employee.is_admin());
        assert_eq!(employee.id, UserId::new(3));
    }
}
