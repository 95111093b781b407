use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, Leave, LeavePage, LeaveQuery, UpdateLeaveRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn apply(&self, payload: CreateLeaveRequest) -> Result<Leave, ApiError> {
        self.client.apply_leave(&payload).await
    }

    pub async fn list(&self, query: LeaveQuery) -> Result<LeavePage, ApiError> {
        self.client.list_leaves(query).await
    }

    pub async fn update(&self, id: i64, changes: UpdateLeaveRequest) -> Result<Leave, ApiError> {
        self.client.update_leave(id, &changes).await
    }
}
