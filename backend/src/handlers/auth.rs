use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::extract::AppJson,
    models::user::{
        AuthResponse, CurrentUser, LoginRequest, NewUser, RegisterRequest, User, UserResponse,
    },
    repositories::{UserRepository, UserRepositoryTrait},
    state::AppState,
    utils::{
        jwt::create_access_token,
        password::{dummy_verify, hash_password, verify_password},
    },
    validation::rules::normalize_email,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;
    let repo = UserRepository::new();

    let Some(user) = repo
        .find_by_email(&state.pool, &normalize_email(&payload.email))
        .await? else {
        dummy_verify(&payload.password);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    tracing::info!(user_id = %user.id, role = user.role.as_str(), "User logged in");
    Ok(Json(auth_response(&state, user, "Login successful")?))
}

pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.validate()?;
    let repo = UserRepository::new();
    let username = payload.username.trim().to_string();
    let email = normalize_email(&payload.email);

    if repo
        .exists_by_username_or_email(&state.pool, &username, &email)
        .await?
    {
        return Err(AppError::Conflict(
            "User with this email or username already exists".into(),
        ));
    }

    let new_user = NewUser {
        username,
        email,
        password_hash: hash_password(&payload.password)?,
        role: payload.role.unwrap_or_default(),
    };
    // the unique constraints still decide a concurrent duplicate; 23505 maps to 409
    let user = repo.create(&state.pool, &new_user).await?;

    tracing::info!(user_id = %user.id, role = user.role.as_str(), "User registered");
    let response = auth_response(&state, user, "User created successfully")?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn me(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserRepository::new()
        .find_by_id(&state.pool, caller.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(UserResponse::from(user)))
}

fn auth_response(state: &AppState, user: User, message: &str) -> Result<AuthResponse, AppError> {
    let token = create_access_token(
        &user,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;
    Ok(AuthResponse {
        message: message.to_string(),
        token,
        user: UserResponse::from(user),
    })
}
