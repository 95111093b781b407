#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    models::{
        leave::{
            CreateLeaveRequest, Leave, LeaveStatus, LeaveType, UpdateLeaveRequest,
            UpdateLeaveStatusRequest,
        },
        user::{AuthResponse, LoginRequest, RegisterRequest, UserResponse, UserRole},
        LeaveListQuery, LeavePage,
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        login_doc,
        register_doc,
        me_doc,
        apply_leave_doc,
        list_leaves_doc,
        get_leave_doc,
        update_leave_doc,
        approve_leave_doc,
        reject_leave_doc,
        set_leave_status_doc,
        list_pending_leaves_doc
    ),
    components(
        schemas(
            // auth
            LoginRequest,
            RegisterRequest,
            AuthResponse,
            UserResponse,
            UserRole,
            // leaves
            Leave,
            LeaveType,
            LeaveStatus,
            CreateLeaveRequest,
            UpdateLeaveRequest,
            UpdateLeaveStatusRequest,
            LeavePage,
            // errors
            ErrorResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Login, registration and the current user"),
        (name = "Leaves", description = "Submitting and browsing leave requests"),
        (name = "Admin", description = "Approval decisions")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 429, description = "Too many attempts", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email or username taken", body = ErrorResponse)
    ),
    tag = "Auth",
    security(())
)]
fn register_doc() {}

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    post,
    path = "/api/apply-leave",
    request_body = CreateLeaveRequest,
    responses(
        (status = 201, description = "Leave submitted", body = Leave),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Leaves"
)]
fn apply_leave_doc() {}

#[utoipa::path(
    get,
    path = "/api/leaves",
    params(LeaveListQuery),
    responses(
        (status = 200, description = "One page of leaves", body = LeavePage),
        (status = 400, description = "Unknown status filter", body = ErrorResponse)
    ),
    tag = "Leaves"
)]
fn list_leaves_doc() {}

#[utoipa::path(
    get,
    path = "/api/leaves/{id}",
    params(("id" = i64, Path, description = "Leave id")),
    responses(
        (status = 200, body = Leave),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Leave not found", body = ErrorResponse)
    ),
    tag = "Leaves"
)]
fn get_leave_doc() {}

#[utoipa::path(
    put,
    path = "/api/leaves/{id}",
    params(("id" = i64, Path, description = "Leave id")),
    request_body = UpdateLeaveRequest,
    responses(
        (status = 200, description = "Leave updated", body = Leave),
        (status = 400, description = "Invalid input or leave no longer pending", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Leave not found", body = ErrorResponse)
    ),
    tag = "Leaves"
)]
fn update_leave_doc() {}

#[utoipa::path(
    put,
    path = "/api/leaves/{id}/approve",
    params(("id" = i64, Path, description = "Leave id")),
    responses(
        (status = 200, body = Leave),
        (status = 404, description = "Leave not found", body = ErrorResponse),
        (status = 409, description = "Leave already decided", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn approve_leave_doc() {}

#[utoipa::path(
    put,
    path = "/api/leaves/{id}/reject",
    params(("id" = i64, Path, description = "Leave id")),
    responses(
        (status = 200, body = Leave),
        (status = 404, description = "Leave not found", body = ErrorResponse),
        (status = 409, description = "Leave already decided", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn reject_leave_doc() {}

#[utoipa::path(
    put,
    path = "/api/leaves/{id}/status",
    params(("id" = i64, Path, description = "Leave id")),
    request_body = UpdateLeaveStatusRequest,
    responses(
        (status = 200, body = Leave),
        (status = 404, description = "Leave not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse)
    ),
    tag = "Admin"
)]
fn set_leave_status_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/leaves/pending",
    responses((status = 200, description = "Pending leaves, newest first", body = [Leave])),
    tag = "Admin"
)]
fn list_pending_leaves_doc() {}
