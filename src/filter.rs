//! Client-side Filtering & Search
//!
//! Pure helpers over already-fetched snapshots. Enum filters are exact
//! match, `None` is the "all" sentinel (no filter on that field), and text
//! search is case-insensitive substring. No network round-trips here.

use crate::models::{Activity, ActivityStatus, ActivityType, CaseSummary};

/// Filter criteria for an activity list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    pub activity_type: Option<ActivityType>,
    pub status: Option<ActivityStatus>,
    pub analyst_id: Option<u64>,
    /// Free-text search over title + description
    pub search: String,
}

fn matches_search(activity: &Activity, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    activity.title.to_lowercase().contains(&needle)
        || activity.description.to_lowercase().contains(&needle)
}

/// Visible subset of `activities` under `filter`
pub fn filter_activities(activities: &[Activity], filter: &ActivityFilter) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| filter.activity_type.is_none_or(|t| a.activity_type == t))
        .filter(|a| filter.status.is_none_or(|s| a.status == s))
        .filter(|a| filter.analyst_id.is_none_or(|id| a.analyst_id == id))
        .filter(|a| matches_search(a, &filter.search))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over title and case number
pub fn search_cases(cases: &[CaseSummary], needle: &str) -> Vec<CaseSummary> {
    if needle.is_empty() {
        return cases.to_vec();
    }
    let needle = needle.to_lowercase();
    cases
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&needle)
                || c.case_number.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseStatus, Priority};
    use chrono::{TimeZone, Utc};

    fn make_activity(id: u64, title: &str, status: ActivityStatus, kind: ActivityType) -> Activity {
        Activity {
            id,
            case_id: 1,
            analyst_id: id,
            activity_type: kind,
            title: title.to_string(),
            description: String::new(),
            status,
            tags: Vec::new(),
            priority: Priority::Medium,
            activity_date: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            time_spent_minutes: 15,
            include_in_report: false,
            is_confidential: false,
        }
    }

    #[test]
    fn all_sentinel_returns_unfiltered_set() {
        let activities = vec![
            make_activity(1, "a", ActivityStatus::Open, ActivityType::Note),
            make_activity(2, "b", ActivityStatus::Completed, ActivityType::Finding),
        ];
        let visible = filter_activities(&activities, &ActivityFilter::default());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn status_filter_is_exact_match() {
        let activities = vec![
            make_activity(1, "a", ActivityStatus::Open, ActivityType::Note),
            make_activity(2, "b", ActivityStatus::InProgress, ActivityType::Note),
            make_activity(3, "c", ActivityStatus::Open, ActivityType::Note),
        ];
        let filter = ActivityFilter { status: Some(ActivityStatus::Open), ..Default::default() };
        let visible = filter_activities(&activities, &filter);
        assert_eq!(visible.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let activities = vec![
            make_activity(1, "Smith interview", ActivityStatus::Open, ActivityType::Interview),
            make_activity(2, "Unrelated note", ActivityStatus::Open, ActivityType::Note),
        ];
        let filter = ActivityFilter { search: "smith".to_string(), ..Default::default() };
        let visible = filter_activities(&activities, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn search_also_covers_description() {
        let mut activity = make_activity(1, "Daily log", ActivityStatus::Open, ActivityType::Note);
        activity.description = "Spoke with John Smith by phone".to_string();
        let filter = ActivityFilter { search: "SMITH".to_string(), ..Default::default() };
        let visible = filter_activities(&[activity], &filter);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn filters_combine() {
        let activities = vec![
            make_activity(1, "Smith interview", ActivityStatus::Open, ActivityType::Interview),
            make_activity(2, "Smith follow-up", ActivityStatus::Open, ActivityType::Note),
        ];
        let filter = ActivityFilter {
            activity_type: Some(ActivityType::Interview),
            search: "smith".to_string(),
            ..Default::default()
        };
        let visible = filter_activities(&activities, &filter);
        assert_eq!(visible.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn analyst_filter_is_exact() {
        let activities = vec![
            make_activity(7, "a", ActivityStatus::Open, ActivityType::Note),
            make_activity(8, "b", ActivityStatus::Open, ActivityType::Note),
        ];
        let filter = ActivityFilter { analyst_id: Some(8), ..Default::default() };
        let visible = filter_activities(&activities, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].analyst_id, 8);
    }

    fn make_case(id: u64, number: &str, title: &str) -> CaseSummary {
        CaseSummary {
            id,
            case_number: number.to_string(),
            title: title.to_string(),
            status: CaseStatus::Open,
            priority: Priority::Low,
            case_type: "fraud".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn case_search_matches_title_or_number() {
        let cases = vec![
            make_case(1, "CR-2025-001", "Vendor fraud"),
            make_case(2, "CR-2025-002", "Phishing wave"),
        ];
        assert_eq!(search_cases(&cases, "fraud").len(), 1);
        assert_eq!(search_cases(&cases, "2025-002")[0].id, 2);
        assert_eq!(search_cases(&cases, "").len(), 2);
    }
}
