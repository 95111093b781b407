use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{ApiError, AuthResponse, LoginRequest, RegisterRequest, UserResponse},
};
use crate::utils::storage;

fn persist_session(response: &AuthResponse) {
    if let Err(err) = storage::save_token(&response.token) {
        log::warn!("session not persisted: {}", err);
    }
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = Self::to_body(request)?;
        let response: AuthResponse = self
            .request(Method::POST, "/login", &[], Some(body), Access::Public)
            .await?;
        persist_session(&response);
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = Self::to_body(request)?;
        let response: AuthResponse = self
            .request(Method::POST, "/register", &[], Some(body), Access::Public)
            .await?;
        persist_session(&response);
        Ok(response)
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        self.request(Method::GET, "/me", &[], None, Access::Bearer)
            .await
    }

    /// Tokens are stateless; signing out only forgets the stored one.
    pub fn logout(&self) {
        Self::clear_session();
    }
}
