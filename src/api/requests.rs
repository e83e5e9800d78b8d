//! Case Request Endpoints
//!
//! Case-creation request workflow: list, submit, approve/reject.

use serde::Serialize;

use super::{get_json, post_json, put_json, ApiError};
use crate::models::{CaseRequest, Priority, RequestStatus};

#[derive(Serialize)]
pub struct CreateRequestArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub priority: Priority,
}

pub async fn list_case_requests() -> Result<Vec<CaseRequest>, ApiError> {
    get_json("/api/case-requests", &[]).await
}

pub async fn create_case_request(args: &CreateRequestArgs<'_>) -> Result<CaseRequest, ApiError> {
    post_json("/api/case-requests", args).await
}

#[derive(Serialize)]
struct StatusArgs {
    status: RequestStatus,
}

/// Admin decision on a pending request
pub async fn update_case_request(id: u64, status: RequestStatus) -> Result<CaseRequest, ApiError> {
    put_json(&format!("/api/case-requests/{id}"), &StatusArgs { status }).await
}
