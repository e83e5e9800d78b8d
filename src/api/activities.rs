//! Activity Endpoints
//!
//! CRUD against the backend activity store, scoped to a case or an analyst.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{delete, get_json, post_json, put_json, ApiError};
use crate::models::{Activity, ActivityStatus, ActivitySummary, ActivityType, Priority};

/// Create/update payload covering every mutable Activity field
#[derive(Serialize)]
pub struct ActivityPayload<'a> {
    pub activity_type: ActivityType,
    pub title: &'a str,
    pub description: &'a str,
    pub status: ActivityStatus,
    pub tags: &'a [String],
    pub priority: Priority,
    pub activity_date: DateTime<Utc>,
    pub time_spent_minutes: u32,
    pub include_in_report: bool,
    pub is_confidential: bool,
}

pub async fn list_case_activities(case_id: u64) -> Result<Vec<Activity>, ApiError> {
    get_json(&format!("/api/cases/{case_id}/activities"), &[]).await
}

pub async fn case_activity_summary(case_id: u64) -> Result<ActivitySummary, ApiError> {
    get_json(&format!("/api/cases/{case_id}/activities/summary"), &[]).await
}

pub async fn list_analyst_activities(analyst_id: u64) -> Result<Vec<Activity>, ApiError> {
    get_json(&format!("/api/analysts/{analyst_id}/activities"), &[]).await
}

pub async fn analyst_activity_summary(analyst_id: u64) -> Result<ActivitySummary, ApiError> {
    get_json(&format!("/api/analysts/{analyst_id}/activities/summary"), &[]).await
}

pub async fn create_activity(
    case_id: u64,
    payload: &ActivityPayload<'_>,
) -> Result<Activity, ApiError> {
    post_json(&format!("/api/cases/{case_id}/activities"), payload).await
}

pub async fn update_activity(
    case_id: u64,
    activity_id: u64,
    payload: &ActivityPayload<'_>,
) -> Result<Activity, ApiError> {
    put_json(&format!("/api/cases/{case_id}/activities/{activity_id}"), payload).await
}

pub async fn delete_activity(case_id: u64, activity_id: u64) -> Result<(), ApiError> {
    delete(&format!("/api/cases/{case_id}/activities/{activity_id}")).await
}
