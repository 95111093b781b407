//! Leave repository.
//!
//! Every write is a single statement. Status changes and owner edits carry
//! the expected current status in their `WHERE` clause and return `None`
//! when the row no longer matches, leaving the caller to re-read and decide.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::AppError;
use crate::models::leave::{CreateLeaveRequest, Leave, LeaveStatus};
use crate::models::PageWindow;
use crate::repositories::common::push_clause;
use crate::types::{LeaveId, UserId};

const LEAVE_COLUMNS: &str = "id, user_id, employee_name, leave_type, from_date, to_date, reason, \
                             status, created_at, updated_at";

/// Optional owner and status restrictions for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveFilter {
    pub owner: Option<UserId>,
    pub status: Option<LeaveStatus>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        db: &PgPool,
        user_id: UserId,
        leave: &CreateLeaveRequest,
    ) -> Result<Leave, AppError>;

    async fn find_by_id(&self, db: &PgPool, id: LeaveId) -> Result<Option<Leave>, AppError>;

    /// Newest first.
    async fn find_by_status(
        &self,
        db: &PgPool,
        status: LeaveStatus,
    ) -> Result<Vec<Leave>, AppError>;

    /// One page of leaves plus the total number matching the filter.
    async fn find_page(
        &self,
        db: &PgPool,
        filter: LeaveFilter,
        window: PageWindow,
    ) -> Result<(Vec<Leave>, i64), AppError>;

    /// Owner edit, applied only while the leave is still pending.
    async fn update_details(
        &self,
        db: &PgPool,
        id: LeaveId,
        owner: UserId,
        details: &CreateLeaveRequest,
    ) -> Result<Option<Leave>, AppError>;

    /// Moves `id` from `from` to `to`; `None` if its status is no longer `from`.
    async fn update_status(
        &self,
        db: &PgPool,
        id: LeaveId,
        from: LeaveStatus,
        to: LeaveStatus,
    ) -> Result<Option<Leave>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveRepository;

impl LeaveRepository {
    pub fn new() -> Self {
        Self
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: LeaveFilter) {
    let mut has_clause = false;
    if let Some(owner) = filter.owner {
        push_clause(builder, &mut has_clause);
        builder.push("user_id = ").push_bind(owner);
    }
    if let Some(status) = filter.status {
        push_clause(builder, &mut has_clause);
        builder.push("status = ").push_bind(status.as_str());
    }
}

#[async_trait]
impl LeaveRepositoryTrait for LeaveRepository {
    async fn create(
        &self,
        db: &PgPool,
        user_id: UserId,
        leave: &CreateLeaveRequest,
    ) -> Result<Leave, AppError> {
        let query = format!(
            "INSERT INTO leaves (user_id, employee_name, leave_type, from_date, to_date, reason, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            LEAVE_COLUMNS
        );
        let row = sqlx::query_as::<_, Leave>(&query)
            .bind(user_id)
            .bind(leave.employee_name.trim())
            .bind(leave.leave_type.as_str())
            .bind(leave.from_date)
            .bind(leave.to_date)
            .bind(&leave.reason)
            .bind(LeaveStatus::Pending.as_str())
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, db: &PgPool, id: LeaveId) -> Result<Option<Leave>, AppError> {
        let query = format!("SELECT {} FROM leaves WHERE id = $1", LEAVE_COLUMNS);
        let row = sqlx::query_as::<_, Leave>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn find_by_status(
        &self,
        db: &PgPool,
        status: LeaveStatus,
    ) -> Result<Vec<Leave>, AppError> {
        let query = format!(
            "SELECT {} FROM leaves WHERE status = $1 ORDER BY created_at DESC, id DESC",
            LEAVE_COLUMNS
        );
        let rows = sqlx::query_as::<_, Leave>(&query)
            .bind(status.as_str())
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_page(
        &self,
        db: &PgPool,
        filter: LeaveFilter,
        window: PageWindow,
    ) -> Result<(Vec<Leave>, i64), AppError> {
        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM leaves");
        push_filter(&mut count_builder, filter);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(db)
            .await?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM leaves",
            LEAVE_COLUMNS
        ));
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(window.limit)
            .push(" OFFSET ")
            .push_bind(window.offset());
        let rows = builder.build_query_as::<Leave>().fetch_all(db).await?;

        Ok((rows, total))
    }

    async fn update_details(
        &self,
        db: &PgPool,
        id: LeaveId,
        owner: UserId,
        details: &CreateLeaveRequest,
    ) -> Result<Option<Leave>, AppError> {
        let query = format!(
            "UPDATE leaves SET employee_name = $3, leave_type = $4, from_date = $5, to_date = $6, \
             reason = $7, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND status = $8 RETURNING {}",
            LEAVE_COLUMNS
        );
        let row = sqlx::query_as::<_, Leave>(&query)
            .bind(id)
            .bind(owner)
            .bind(details.employee_name.trim())
            .bind(details.leave_type.as_str())
            .bind(details.from_date)
            .bind(details.to_date)
            .bind(&details.reason)
            .bind(LeaveStatus::Pending.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    async fn update_status(
        &self,
        db: &PgPool,
        id: LeaveId,
        from: LeaveStatus,
        to: LeaveStatus,
    ) -> Result<Option<Leave>, AppError> {
        let query = format!(
            "UPDATE leaves SET status = $3, updated_at = NOW() \
             WHERE id = $1 AND status = $2 RETURNING {}",
            LEAVE_COLUMNS
        );
        let row = sqlx::query_as::<_, Leave>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }
}
