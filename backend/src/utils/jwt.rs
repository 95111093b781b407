use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::{CurrentUser, User, UserRole};
use crate::types::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub iat: i64, // issued at
    pub exp: i64, // expiration time
}

impl Claims {
    pub fn new(user_id: UserId, email: String, role: UserRole, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let hours = i64::try_from(expiration_hours).unwrap_or(i64::MAX / 3600);
        let exp = now + Duration::hours(hours);

        Self {
            user_id,
            email,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            id: self.user_id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

pub fn create_access_token(user: &User, secret: &str, expiration_hours: u64) -> anyhow::Result<String> {
    let claims = Claims::new(user.id, user.email.clone(), user.role, expiration_hours);
    encode_claims(&claims, secret)
}

pub fn encode_claims(claims: &Claims, secret: &str) -> anyhow::Result<String> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}
