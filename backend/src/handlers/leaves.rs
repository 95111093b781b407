use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::{
        extract::{AppJson, AppQuery},
        parse_leave_id,
    },
    models::{
        leave::{CreateLeaveRequest, Leave, UpdateLeaveRequest},
        user::CurrentUser,
        LeaveListQuery, LeavePage,
    },
    repositories::{LeaveFilter, LeaveRepository, LeaveRepositoryTrait},
    services::leave as leave_service,
    state::AppState,
};

pub async fn apply_leave(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<CreateLeaveRequest>,
) -> Result<(StatusCode, Json<Leave>), AppError> {
    payload.validate()?;

    let leave = LeaveRepository::new()
        .create(&state.pool, caller.id, &payload)
        .await?;
    tracing::info!(
        leave_id = %leave.id,
        user_id = %caller.id,
        leave_type = leave.leave_type.as_str(),
        "Leave submitted"
    );
    Ok((StatusCode::CREATED, Json(leave)))
}

/// Admins page through every leave; employees only through their own.
pub async fn list_leaves(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(query): AppQuery<LeaveListQuery>,
) -> Result<Json<LeavePage>, AppError> {
    let status = query
        .status_filter()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let window = query.window();
    let filter = LeaveFilter {
        owner: (!caller.is_admin()).then_some(caller.id),
        status,
    };

    let (leaves, total) = LeaveRepository::new()
        .find_page(&state.pool, filter, window)
        .await?;
    Ok(Json(LeavePage::new(leaves, total, window)))
}

pub async fn get_leave(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Leave>, AppError> {
    let id = parse_leave_id(&id)?;
    let leave = leave_service::get_visible(&LeaveRepository::new(), &state.pool, &caller, id).await?;
    Ok(Json(leave))
}

pub async fn update_leave(
    State(state): State<AppState>,
    caller: CurrentUser,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateLeaveRequest>,
) -> Result<Json<Leave>, AppError> {
    let id = parse_leave_id(&id)?;
    let leave =
        leave_service::edit(&LeaveRepository::new(), &state.pool, &caller, id, payload).await?;
    tracing::info!(leave_id = %leave.id, user_id = %caller.id, "Leave edited");
    Ok(Json(leave))
}
