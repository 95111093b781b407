//! Leave lifecycle rules on top of the repository.
//!
//! The repository writes are compare-and-set; when one comes back empty the
//! row is re-read so the caller gets the answer for the state that won.

use sqlx::PgPool;
use validator::Validate;

use crate::error::AppError;
use crate::models::leave::{Leave, LeaveStatus, Transition, UpdateLeaveRequest};
use crate::models::user::CurrentUser;
use crate::repositories::LeaveRepositoryTrait;
use crate::types::LeaveId;

const NOT_FOUND: &str = "Leave not found";
const NOT_PENDING: &str = "Only pending leaves can be edited";

async fn load(
    repo: &dyn LeaveRepositoryTrait,
    db: &PgPool,
    id: LeaveId,
) -> Result<Leave, AppError> {
    repo.find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
}

/// Owner or admin may read a leave.
pub async fn get_visible(
    repo: &dyn LeaveRepositoryTrait,
    db: &PgPool,
    caller: &CurrentUser,
    id: LeaveId,
) -> Result<Leave, AppError> {
    let leave = load(repo, db, id).await?;
    if !caller.is_admin() && !leave.is_owned_by(caller.id) {
        return Err(AppError::Forbidden("Access denied".into()));
    }
    Ok(leave)
}

/// Applies an admin status decision.
pub async fn change_status(
    repo: &dyn LeaveRepositoryTrait,
    db: &PgPool,
    id: LeaveId,
    target: LeaveStatus,
) -> Result<Leave, AppError> {
    let current = load(repo, db, id).await?;
    match current.status.transition_to(target) {
        Ok(Transition::Unchanged) => Ok(current),
        Ok(Transition::Apply) => {
            if let Some(updated) = repo.update_status(db, id, current.status, target).await? {
                tracing::info!(leave_id = %id, from = %current.status, to = %target, "Leave status changed");
                return Ok(updated);
            }
            // another decision landed between the read and the write
            let latest = load(repo, db, id).await?;
            match latest.status.transition_to(target) {
                Ok(Transition::Unchanged) => Ok(latest),
                Ok(Transition::Apply) => Err(AppError::Conflict(
                    "Leave was modified concurrently; retry".into(),
                )),
                Err(err) => Err(AppError::Conflict(err.to_string())),
            }
        }
        Err(err) => Err(AppError::Conflict(err.to_string())),
    }
}

/// Owner edit of a pending leave. The merged result is validated as a whole.
pub async fn edit(
    repo: &dyn LeaveRepositoryTrait,
    db: &PgPool,
    caller: &CurrentUser,
    id: LeaveId,
    changes: UpdateLeaveRequest,
) -> Result<Leave, AppError> {
    if changes.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    let current = load(repo, db, id).await?;
    if !current.is_owned_by(caller.id) {
        return Err(AppError::Forbidden(
            "Only the owner can edit this leave".into(),
        ));
    }
    if !current.is_pending() {
        return Err(AppError::BadRequest(NOT_PENDING.into()));
    }

    let merged = changes.merge_onto(&current);
    merged.validate()?;

    match repo.update_details(db, id, caller.id, &merged).await? {
        Some(updated) => Ok(updated),
        None => {
            load(repo, db, id).await?;
            Err(AppError::BadRequest(NOT_PENDING.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::leave::LeaveType;
    use crate::models::user::UserRole;
    use crate::repositories::leave::MockLeaveRepositoryTrait;
    use crate::types::UserId;
    use chrono::{NaiveDate, Utc};
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://localhost/unused")
            .expect("create lazy pool")
    }

    fn leave(status: LeaveStatus) -> Leave {
        let now = Utc::now();
        Leave {
            id: LeaveId::new(7),
            user_id: UserId::new(2),
            employee_name: "Ananya Gupta".into(),
            leave_type: LeaveType::Annual,
            from_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
            reason: "Sister's wedding in Jaipur".into(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn caller(id: i64, role: UserRole) -> CurrentUser {
        CurrentUser {
            id: UserId::new(id),
            email: "someone@company.com".into(),
            role,
        }
    }

    fn expect_find(mock: &mut MockLeaveRepositoryTrait, found: Option<Leave>) {
        mock.expect_find_by_id()
            .times(1)
            .returning(move |_, _| Ok(found.clone()));
    }

    #[tokio::test]
    async fn approving_pending_leave_writes_once() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Pending)));
        mock.expect_update_status()
            .withf(|_, id, from, to| {
                *id == LeaveId::new(7)
                    && *from == LeaveStatus::Pending
                    && *to == LeaveStatus::Approved
            })
            .times(1)
            .returning(|_, _, _, _| Ok(Some(leave(LeaveStatus::Approved))));

        let pool = lazy_pool();
        let result = change_status(&mock, &pool, LeaveId::new(7), LeaveStatus::Approved)
            .await
            .expect("approve");
        assert_eq!(result.status, LeaveStatus::Approved);
    }

    #[tokio::test]
    async fn approving_twice_returns_leave_without_writing() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Approved)));
        mock.expect_update_status().never();

        let pool = lazy_pool();
        let result = change_status(&mock, &pool, LeaveId::new(7), LeaveStatus::Approved)
            .await
            .expect("idempotent approve");
        assert_eq!(result.status, LeaveStatus::Approved);
    }

    #[tokio::test]
    async fn rejecting_approved_leave_conflicts() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Approved)));
        mock.expect_update_status().never();

        let pool = lazy_pool();
        let err = change_status(&mock, &pool, LeaveId::new(7), LeaveStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn lost_race_reports_winner_state() {
        let mut mock = MockLeaveRepositoryTrait::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(leave(LeaveStatus::Pending))));
        mock.expect_update_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(None));
        mock.expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(leave(LeaveStatus::Rejected))));

        let pool = lazy_pool();
        let err = change_status(&mock, &pool, LeaveId::new(7), LeaveStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn status_change_on_missing_leave_is_not_found() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, None);

        let pool = lazy_pool();
        let err = change_status(&mock, &pool, LeaveId::new(7), LeaveStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn other_employees_cannot_view() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Pending)));

        let pool = lazy_pool();
        let err = get_visible(&mock, &pool, &caller(3, UserRole::Employee), LeaveId::new(7))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn admins_can_view_any_leave() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Pending)));

        let pool = lazy_pool();
        let found = get_visible(&mock, &pool, &caller(1, UserRole::Admin), LeaveId::new(7))
            .await
            .expect("admin view");
        assert_eq!(found.id, LeaveId::new(7));
    }

    #[tokio::test]
    async fn editing_decided_leave_is_bad_request() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Approved)));
        mock.expect_update_details().never();

        let pool = lazy_pool();
        let changes = UpdateLeaveRequest {
            reason: Some("Changed plans, need different days".into()),
            ..Default::default()
        };
        let err = edit(&mock, &pool, &caller(2, UserRole::Employee), LeaveId::new(7), changes)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn editing_someone_elses_leave_is_forbidden() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Pending)));
        mock.expect_update_details().never();

        let pool = lazy_pool();
        let changes = UpdateLeaveRequest {
            leave_type: Some(LeaveType::Emergency),
            ..Default::default()
        };
        let err = edit(&mock, &pool, &caller(1, UserRole::Admin), LeaveId::new(7), changes)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn edit_with_reversed_dates_fails_validation() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Pending)));
        mock.expect_update_details().never();

        let pool = lazy_pool();
        let changes = UpdateLeaveRequest {
            from_date: NaiveDate::from_ymd_opt(2024, 8, 10),
            ..Default::default()
        };
        let err = edit(&mock, &pool, &caller(2, UserRole::Employee), LeaveId::new(7), changes)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn owner_edit_passes_merged_fields() {
        let mut mock = MockLeaveRepositoryTrait::new();
        expect_find(&mut mock, Some(leave(LeaveStatus::Pending)));
        mock.expect_update_details()
            .withf(|_, id, owner, details| {
                *id == LeaveId::new(7)
                    && *owner == UserId::new(2)
                    && details.leave_type == LeaveType::Personal
                    && details.employee_name == "Ananya Gupta"
            })
            .times(1)
            .returning(|_, _, _, details| {
                let mut updated = leave(LeaveStatus::Pending);
                updated.leave_type = details.leave_type;
                Ok(Some(updated))
            });

        let pool = lazy_pool();
        let changes = UpdateLeaveRequest {
            leave_type: Some(LeaveType::Personal),
            ..Default::default()
        };
        let updated = edit(&mock, &pool, &caller(2, UserRole::Employee), LeaveId::new(7), changes)
            .await
            .expect("edit");
        assert_eq!(updated.leave_type, LeaveType::Personal);
    }

    #[tokio::test]
    async fn empty_edit_is_rejected_before_lookup() {
        let mut mock = MockLeaveRepositoryTrait::new();
        mock.expect_find_by_id().never();

        let pool = lazy_pool();
        let err = edit(
            &mock,
            &pool,
            &caller(2, UserRole::Employee),
            LeaveId::new(7),
            UpdateLeaveRequest::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
