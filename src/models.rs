//! Frontend Models
//!
//! Data structures matching backend entities. Enum-like string fields from
//! the backend (status, priority, activity type) are closed enums so invalid
//! states are unrepresentable on this side of the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user's role. Anything the backend sends that is not
/// `Admin` is treated as a plain analyst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(other)]
    Analyst,
}

/// Authenticated session user (read from client-side storage at init)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    pub role: Role,
}

/// Activity type enumeration (fixed set, backend wire format is snake_case)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Note,
    Finding,
    Evidence,
    Interview,
    Analysis,
    Action,
    Meeting,
    Communication,
    Task,
    Update,
    Milestone,
    Observation,
    Recommendation,
    Decision,
    Other,
}

/// All activity types in display order, for select options
pub const ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::Note,
    ActivityType::Finding,
    ActivityType::Evidence,
    ActivityType::Interview,
    ActivityType::Analysis,
    ActivityType::Action,
    ActivityType::Meeting,
    ActivityType::Communication,
    ActivityType::Task,
    ActivityType::Update,
    ActivityType::Milestone,
    ActivityType::Observation,
    ActivityType::Recommendation,
    ActivityType::Decision,
    ActivityType::Other,
];

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Finding => "finding",
            Self::Evidence => "evidence",
            Self::Interview => "interview",
            Self::Analysis => "analysis",
            Self::Action => "action",
            Self::Meeting => "meeting",
            Self::Communication => "communication",
            Self::Task => "task",
            Self::Update => "update",
            Self::Milestone => "milestone",
            Self::Observation => "observation",
            Self::Recommendation => "recommendation",
            Self::Decision => "decision",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Finding => "Finding",
            Self::Evidence => "Evidence",
            Self::Interview => "Interview",
            Self::Analysis => "Analysis",
            Self::Action => "Action",
            Self::Meeting => "Meeting",
            Self::Communication => "Communication",
            Self::Task => "Task",
            Self::Update => "Update",
            Self::Milestone => "Milestone",
            Self::Observation => "Observation",
            Self::Recommendation => "Recommendation",
            Self::Decision => "Decision",
            Self::Other => "Other",
        }
    }

    /// Parse a select value; `"all"` (the no-filter sentinel) yields `None`
    pub fn from_value(value: &str) -> Option<Self> {
        ACTIVITY_TYPES.iter().copied().find(|t| t.as_str() == value)
    }
}

/// Activity workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Open,
    InProgress,
    Completed,
}

pub const ACTIVITY_STATUSES: &[ActivityStatus] = &[
    ActivityStatus::Open,
    ActivityStatus::InProgress,
    ActivityStatus::Completed,
];

impl ActivityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ACTIVITY_STATUSES.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Priority shared by activities and case requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

pub const PRIORITIES: &[Priority] = &[
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Critical,
];

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        PRIORITIES.iter().copied().find(|p| p.as_str() == value)
    }
}

/// A logged unit of analyst work attached to a case.
///
/// `include_in_report` and `is_confidential` are orthogonal: a confidential
/// activity may still be flagged for export, and the PDF renderer (backend)
/// is the one that must respect confidentiality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub case_id: u64,
    pub analyst_id: u64,
    pub activity_type: ActivityType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ActivityStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub priority: Priority,
    /// When the work occurred (not when the record was created)
    pub activity_date: DateTime<Utc>,
    pub time_spent_minutes: u32,
    pub include_in_report: bool,
    pub is_confidential: bool,
}

/// Aggregate counts returned by the activity summary endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub total_activities: u32,
    pub completed: u32,
    pub in_report: u32,
    pub total_minutes: u32,
}

/// Case status (backend-defined set; this is the set the list filter offers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Closed,
    Archived,
}

pub const CASE_STATUSES: &[CaseStatus] = &[
    CaseStatus::Open,
    CaseStatus::InProgress,
    CaseStatus::Closed,
    CaseStatus::Archived,
];

impl CaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Closed => "Closed",
            Self::Archived => "Archived",
        }
    }
}

/// Case row as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub id: u64,
    pub case_number: String,
    pub title: String,
    pub status: CaseStatus,
    pub priority: Priority,
    /// Free taxonomy owned by the backend, not a closed set
    pub case_type: String,
    pub created_at: DateTime<Utc>,
}

/// Full case detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub summary: CaseSummary,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_analysts: Vec<String>,
}

/// Entry in the generated-reports listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListItem {
    pub id: u64,
    pub case_id: u64,
    pub case_number: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics inside a report preview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewStats {
    pub total_activities: u32,
    pub flagged_content: u32,
    pub sources: u32,
}

/// Flagged content row shown in the preview panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedItem {
    pub source: String,
    pub excerpt: String,
    pub severity: Priority,
}

/// In-page report preview (no download)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPreview {
    pub case_id: u64,
    pub case_number: String,
    pub title: String,
    pub status: CaseStatus,
    #[serde(default)]
    pub statistics: PreviewStats,
    #[serde(default)]
    pub top_flagged: Vec<FlaggedItem>,
}

/// Case-creation request workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A pending proposal to create a case, subject to admin approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRequest {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub status: RequestStatus,
    pub requested_by: String,
    pub created_at: DateTime<Utc>,
}

/// Dashboard aggregate counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: u32,
    pub total_cases: u32,
    pub total_sources: u32,
    pub total_keywords: u32,
}

/// Recent platform activity row on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminActivityItem {
    pub id: u64,
    pub actor: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

/// Third-party integration health entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiIntegrationStatus {
    pub name: String,
    pub healthy: bool,
    #[serde(default)]
    pub last_checked: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_type_wire_format_is_snake_case() {
        let json = serde_json::to_string(&ActivityType::Recommendation).unwrap();
        assert_eq!(json, "\"recommendation\"");
        let back: ActivityType = serde_json::from_str("\"recommendation\"").unwrap();
        assert_eq!(back, ActivityType::Recommendation);
    }

    #[test]
    fn status_round_trips() {
        let s: ActivityStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(s, ActivityStatus::InProgress);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"in_progress\"");
    }

    #[test]
    fn unknown_role_falls_back_to_analyst() {
        let r: Role = serde_json::from_str("\"Supervisor\"").unwrap();
        assert_eq!(r, Role::Analyst);
        let r: Role = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(r, Role::Admin);
    }

    #[test]
    fn from_value_rejects_the_all_sentinel() {
        assert_eq!(ActivityType::from_value("finding"), Some(ActivityType::Finding));
        assert_eq!(ActivityType::from_value("all"), None);
        assert_eq!(ActivityStatus::from_value("all"), None);
        assert_eq!(Priority::from_value("critical"), Some(Priority::Critical));
    }
}
