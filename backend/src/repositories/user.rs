//! User repository.
//!
//! Lookups used by authentication plus account creation. The trait can be
//! mocked with mockall in unit tests.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::{NewUser, User};
use crate::types::UserId;

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_id(&self, db: &PgPool, id: UserId) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, db: &PgPool, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, db: &PgPool, username: &str)
        -> Result<Option<User>, AppError>;

    /// True when either the username or the email is already registered.
    async fn exists_by_username_or_email(
        &self,
        db: &PgPool,
        username: &str,
        email: &str,
    ) -> Result<bool, AppError>;

    async fn create(&self, db: &PgPool, user: &NewUser) -> Result<User, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_id(&self, db: &PgPool, id: UserId) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE lower(email) = lower($1)", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    async fn find_by_username(
        &self,
        db: &PgPool,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    async fn exists_by_username_or_email(
        &self,
        db: &PgPool,
        username: &str,
        email: &str,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR lower(email) = lower($2))",
        )
        .bind(username)
        .bind(email)
        .fetch_one(db)
        .await?;
        Ok(exists)
    }

    async fn create(&self, db: &PgPool, user: &NewUser) -> Result<User, AppError> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            USER_COLUMNS
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .fetch_one(db)
            .await?;
        Ok(created)
    }
}
