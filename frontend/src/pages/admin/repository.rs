use crate::api::{ApiClient, ApiError, Leave, LeavePage, LeaveQuery, LeaveStatus, StatusFilter};
use crate::pages::admin::utils::{AdminOverview, Decision, RECENT_LIMIT};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn pending(&self) -> Result<Vec<Leave>, ApiError> {
        self.client.list_pending_leaves().await
    }

    pub async fn recent(&self, status: LeaveStatus) -> Result<LeavePage, ApiError> {
        self.client
            .list_leaves(LeaveQuery {
                page: 1,
                limit: RECENT_LIMIT,
                status: StatusFilter::Only(status),
            })
            .await
    }

    pub async fn overview(&self) -> Result<AdminOverview, ApiError> {
        let pending = self.pending().await?;
        let approved = self.recent(LeaveStatus::Approved).await?;
        let rejected = self.recent(LeaveStatus::Rejected).await?;
        Ok(AdminOverview::from_parts(pending, approved, rejected))
    }

    pub async fn decide(&self, id: i64, decision: Decision) -> Result<Leave, ApiError> {
        match decision {
            Decision::Approve => self.client.approve_leave(id).await,
            Decision::Reject => self.client.reject_leave(id).await,
        }
    }
}
