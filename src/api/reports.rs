//! Report Endpoints
//!
//! Listing, in-page preview, and binary PDF generation. The backend exposes
//! one report per case, so the case id doubles as the report id.

use super::{get_bytes, get_json, ApiError};
use crate::models::{ReportListItem, ReportPreview};

pub async fn list_reports() -> Result<Vec<ReportListItem>, ApiError> {
    get_json("/api/reports/list", &[]).await
}

/// JSON summary for in-page display, no download
pub async fn report_preview(report_id: u64) -> Result<ReportPreview, ApiError> {
    get_json(&format!("/api/reports/{report_id}/preview"), &[]).await
}

/// Generate a PDF and return its raw bytes. `detailed` adds per-activity
/// content to the export.
pub async fn generate_report(report_id: u64, detailed: bool) -> Result<Vec<u8>, ApiError> {
    let params = [("detailed", detailed.to_string())];
    get_bytes(&format!("/api/reports/{report_id}/generate"), &params).await
}
