//! Case Endpoints
//!
//! List/detail fetches with server-side filters, plus user linking.

use serde::Serialize;

use super::{get_json, post_json, ApiError};
use crate::models::{CaseDetail, CaseSummary};

/// Server-side filters for the case list. `None` means the field is not
/// sent at all (the backend treats absence as "no filter").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub case_type: Option<String>,
    pub per_page: u32,
}

pub async fn list_cases(query: &CaseQuery) -> Result<Vec<CaseSummary>, ApiError> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(status) = &query.status {
        params.push(("status", status.clone()));
    }
    if let Some(priority) = &query.priority {
        params.push(("priority", priority.clone()));
    }
    if let Some(case_type) = &query.case_type {
        params.push(("type", case_type.clone()));
    }
    if query.per_page > 0 {
        params.push(("per_page", query.per_page.to_string()));
    }
    get_json("/api/cases", &params).await
}

pub async fn get_case(id: u64) -> Result<CaseDetail, ApiError> {
    get_json(&format!("/api/cases/{id}"), &[]).await
}

#[derive(Serialize)]
pub struct LinkUserArgs<'a> {
    pub user_id: u64,
    pub role: &'a str,
    pub reason: &'a str,
}

/// Link a user to a case with a role and a justification
pub async fn link_user(case_id: u64, args: &LinkUserArgs<'_>) -> Result<(), ApiError> {
    let _: serde_json::Value = post_json(&format!("/api/cases/{case_id}/users"), args).await?;
    Ok(())
}
