use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppError,
    handlers::{extract::AppJson, parse_leave_id},
    models::leave::{Leave, LeaveStatus, UpdateLeaveStatusRequest},
    repositories::{LeaveRepository, LeaveRepositoryTrait},
    services::leave as leave_service,
    state::AppState,
};

pub async fn approve_leave(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Leave>, AppError> {
    decide(&state, &id, LeaveStatus::Approved).await
}

pub async fn reject_leave(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Leave>, AppError> {
    decide(&state, &id, LeaveStatus::Rejected).await
}

pub async fn set_leave_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateLeaveStatusRequest>,
) -> Result<Json<Leave>, AppError> {
    decide(&state, &id, payload.status).await
}

/// Pending queue for the approval panel, newest first.
pub async fn list_pending_leaves(
    State(state): State<AppState>,
) -> Result<Json<Vec<Leave>>, AppError> {
    let leaves = LeaveRepository::new()
        .find_by_status(&state.pool, LeaveStatus::Pending)
        .await?;
    Ok(Json(leaves))
}

async fn decide(state: &AppState, raw_id: &str, target: LeaveStatus) -> Result<Json<Leave>, AppError> {
    let id = parse_leave_id(raw_id)?;
    let leave =
        leave_service::change_status(&LeaveRepository::new(), &state.pool, id, target).await?;
    Ok(Json(leave))
}
