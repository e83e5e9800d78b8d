//! Admin Endpoints
//!
//! Dashboard aggregates and third-party integration health.

use super::{get_json, ApiError};
use crate::models::{AdminActivityItem, AdminStats, ApiIntegrationStatus};

pub async fn admin_stats() -> Result<AdminStats, ApiError> {
    get_json("/api/admin/stats", &[]).await
}

pub async fn admin_activity() -> Result<Vec<AdminActivityItem>, ApiError> {
    get_json("/api/admin/activity", &[]).await
}

pub async fn api_status() -> Result<Vec<ApiIntegrationStatus>, ApiError> {
    get_json("/api/admin/api-status", &[]).await
}
