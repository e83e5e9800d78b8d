//! Performance Scoring
//!
//! Derives four 0-100 scores from an analyst's activity history over a
//! trailing window. Pure function of fetched data, no persistence.
//!
//! Policy constants the source material left informal, fixed here:
//! productivity saturates at [`PRODUCTIVITY_TARGET_PER_DAY`] activities per
//! day, collaboration at [`COLLABORATION_TARGET_CASES`] distinct cases.
//! All scores round down to whole percent (2 of 3 in-report = quality 66).

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use crate::models::Activity;

/// Activities per day that count as a "full" workload
pub const PRODUCTIVITY_TARGET_PER_DAY: f64 = 4.0;

/// Distinct cases touched in the window that count as full collaboration
pub const COLLABORATION_TARGET_CASES: f64 = 5.0;

/// The four derived scores, each clamped to 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceScores {
    pub productivity: u8,
    pub consistency: u8,
    pub quality: u8,
    pub collaboration: u8,
}

/// Floor-rounded percentage of `num / den`, clamped; 0 when `den` is 0
fn ratio_score(num: f64, den: f64) -> u8 {
    if den <= 0.0 {
        return 0;
    }
    ((num / den) * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// Compute all four scores over the trailing `window_days` ending at `as_of`.
///
/// An empty window yields all zeros, never NaN. A zero-length window is
/// treated as empty.
pub fn performance_scores(
    activities: &[Activity],
    as_of: DateTime<Utc>,
    window_days: u32,
) -> PerformanceScores {
    if window_days == 0 {
        return PerformanceScores::default();
    }
    let window_start = as_of - Duration::days(i64::from(window_days));

    let in_window: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.activity_date > window_start && a.activity_date <= as_of)
        .collect();
    if in_window.is_empty() {
        return PerformanceScores::default();
    }

    let total = in_window.len() as f64;
    let days = f64::from(window_days);

    let per_day = total / days;
    let productivity = ratio_score(per_day, PRODUCTIVITY_TARGET_PER_DAY);

    let active_days: HashSet<_> = in_window.iter().map(|a| a.activity_date.date_naive()).collect();
    let consistency = ratio_score(active_days.len() as f64, days);

    let in_report = in_window.iter().filter(|a| a.include_in_report).count() as f64;
    let quality = ratio_score(in_report, total);

    let distinct_cases: HashSet<_> = in_window.iter().map(|a| a.case_id).collect();
    let collaboration = ratio_score(distinct_cases.len() as f64, COLLABORATION_TARGET_CASES);

    PerformanceScores { productivity, consistency, quality, collaboration }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityStatus, ActivityType, Priority};
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
    }

    fn make_activity(id: u64, case_id: u64, days_ago: i64, in_report: bool) -> Activity {
        Activity {
            id,
            case_id,
            analyst_id: 1,
            activity_type: ActivityType::Note,
            title: format!("Activity {}", id),
            description: String::new(),
            status: ActivityStatus::Open,
            tags: Vec::new(),
            priority: Priority::Medium,
            activity_date: as_of() - Duration::days(days_ago),
            time_spent_minutes: 30,
            include_in_report: in_report,
            is_confidential: false,
        }
    }

    #[test]
    fn empty_window_scores_zero() {
        let scores = performance_scores(&[], as_of(), 30);
        assert_eq!(scores, PerformanceScores::default());
    }

    #[test]
    fn zero_length_window_scores_zero() {
        let activities = vec![make_activity(1, 1, 0, true)];
        let scores = performance_scores(&activities, as_of(), 0);
        assert_eq!(scores, PerformanceScores::default());
    }

    #[test]
    fn activities_outside_window_are_ignored() {
        let activities = vec![make_activity(1, 1, 40, true)];
        let scores = performance_scores(&activities, as_of(), 30);
        assert_eq!(scores, PerformanceScores::default());
    }

    #[test]
    fn quality_is_floored_in_report_ratio() {
        // 2 of 3 flagged for report: floor(66.66) = 66
        let activities = vec![
            make_activity(1, 1, 1, true),
            make_activity(2, 1, 2, true),
            make_activity(3, 1, 3, false),
        ];
        let scores = performance_scores(&activities, as_of(), 30);
        assert_eq!(scores.quality, 66);
    }

    #[test]
    fn quality_is_100_when_everything_is_in_report() {
        let activities = vec![make_activity(1, 1, 1, true), make_activity(2, 1, 2, true)];
        let scores = performance_scores(&activities, as_of(), 30);
        assert_eq!(scores.quality, 100);
    }

    #[test]
    fn productivity_saturates_at_target_per_day() {
        // 7-day window, 4/day target: 28 activities reach 100, more stays 100
        let mut activities: Vec<Activity> =
            (0..28).map(|i| make_activity(i, 1, (i % 7) as i64, false)).collect();
        let scores = performance_scores(&activities, as_of(), 7);
        assert_eq!(scores.productivity, 100);

        activities.push(make_activity(99, 1, 1, false));
        let scores = performance_scores(&activities, as_of(), 7);
        assert_eq!(scores.productivity, 100);
    }

    #[test]
    fn productivity_is_monotone_in_activity_count() {
        let mut activities = Vec::new();
        let mut previous = 0u8;
        for i in 0..20 {
            activities.push(make_activity(i, 1, (i % 7) as i64, false));
            let scores = performance_scores(&activities, as_of(), 7);
            assert!(scores.productivity >= previous);
            previous = scores.productivity;
        }
    }

    #[test]
    fn consistency_is_fraction_of_active_days() {
        // 3 distinct days out of 10
        let activities = vec![
            make_activity(1, 1, 1, false),
            make_activity(2, 1, 1, false),
            make_activity(3, 1, 4, false),
            make_activity(4, 1, 6, false),
        ];
        let scores = performance_scores(&activities, as_of(), 10);
        assert_eq!(scores.consistency, 30);
    }

    #[test]
    fn consistency_is_monotone_in_day_coverage() {
        let mut activities = Vec::new();
        let mut previous = 0u8;
        for day in 0..10 {
            activities.push(make_activity(day as u64, 1, day, false));
            let scores = performance_scores(&activities, as_of(), 10);
            assert!(scores.consistency >= previous);
            previous = scores.consistency;
        }
    }

    #[test]
    fn collaboration_counts_distinct_cases_and_saturates() {
        let activities: Vec<Activity> =
            (0..3).map(|i| make_activity(i, i + 1, 1, false)).collect();
        let scores = performance_scores(&activities, as_of(), 30);
        assert_eq!(scores.collaboration, 60);

        let activities: Vec<Activity> =
            (0..8).map(|i| make_activity(i, i + 1, 1, false)).collect();
        let scores = performance_scores(&activities, as_of(), 30);
        assert_eq!(scores.collaboration, 100);
    }

    #[test]
    fn same_case_twice_is_one_collaboration_case() {
        let activities = vec![make_activity(1, 5, 1, false), make_activity(2, 5, 2, false)];
        let scores = performance_scores(&activities, as_of(), 30);
        assert_eq!(scores.collaboration, 20);
    }
}
