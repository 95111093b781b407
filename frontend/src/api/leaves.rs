use reqwest::Method;

use super::{
    client::{Access, ApiClient},
    types::{
        ApiError, CreateLeaveRequest, Leave, LeavePage, LeaveQuery, UpdateLeaveRequest,
    },
};

impl ApiClient {
    pub async fn apply_leave(&self, request: &CreateLeaveRequest) -> Result<Leave, ApiError> {
        let body = Self::to_body(request)?;
        self.request(Method::POST, "/apply-leave", &[], Some(body), Access::Bearer)
            .await
    }

    pub async fn list_leaves(&self, query: LeaveQuery) -> Result<LeavePage, ApiError> {
        self.request(
            Method::GET,
            "/leaves",
            &query.to_params(),
            None,
            Access::Bearer,
        )
        .await
    }

    pub async fn update_leave(
        &self,
        id: i64,
        changes: &UpdateLeaveRequest,
    ) -> Result<Leave, ApiError> {
        if changes.is_empty() {
            return Err(ApiError::validation("No fields to update"));
        }
        let body = Self::to_body(changes)?;
        self.request(
            Method::PUT,
            &format!("/leaves/{}", id),
            &[],
            Some(body),
            Access::Bearer,
        )
        .await
    }

    pub async fn approve_leave(&self, id: i64) -> Result<Leave, ApiError> {
        self.decide_leave(id, "approve").await
    }

    pub async fn reject_leave(&self, id: i64) -> Result<Leave, ApiError> {
        self.decide_leave(id, "reject").await
    }

    async fn decide_leave(&self, id: i64, action: &str) -> Result<Leave, ApiError> {
        self.request(
            Method::PUT,
            &format!("/leaves/{}/{}", id, action),
            &[],
            None,
            Access::Bearer,
        )
        .await
    }

    pub async fn list_pending_leaves(&self) -> Result<Vec<Leave>, ApiError> {
        self.request(
            Method::GET,
            "/admin/leaves/pending",
            &[],
            None,
            Access::Bearer,
        )
        .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn empty_edit_is_rejected_before_sending() {
        let client = ApiClient::new_with_base_url("http://127.0.0.1:1/api");
        let err = client
            .update_leave(4, &UpdateLeaveRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "No fields to update");
    }
}
