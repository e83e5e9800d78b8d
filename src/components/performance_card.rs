//! Performance Card Component
//!
//! Renders the four analyst scores (productivity, consistency, quality,
//! collaboration) over a trailing 30-day window. Computation is the pure
//! scoring module; this component only displays.

use chrono::Utc;
use leptos::prelude::*;

use crate::models::Activity;
use crate::scoring::{performance_scores, PerformanceScores};

/// Scoring window shown on the card
const WINDOW_DAYS: u32 = 30;

#[component]
fn ScoreBar(label: &'static str, value: Memo<u8>) -> impl IntoView {
    view! {
        <div class="score-row">
            <span class="score-label">{label}</span>
            <div class="score-track">
                <div
                    class="score-fill"
                    style=move || format!("width: {}%;", value.get())
                ></div>
            </div>
            <span class="score-value">{move || value.get()}</span>
        </div>
    }
}

/// Four-score performance summary for an analyst's activity history
#[component]
pub fn PerformanceCard(#[prop(into)] activities: Signal<Vec<Activity>>) -> impl IntoView {
    let scores: Memo<PerformanceScores> =
        Memo::new(move |_| performance_scores(&activities.get(), Utc::now(), WINDOW_DAYS));

    let productivity = Memo::new(move |_| scores.get().productivity);
    let consistency = Memo::new(move |_| scores.get().consistency);
    let quality = Memo::new(move |_| scores.get().quality);
    let collaboration = Memo::new(move |_| scores.get().collaboration);

    view! {
        <div class="card performance-card">
            <h3>{format!("Performance (last {} days)", WINDOW_DAYS)}</h3>
            <ScoreBar label="Productivity" value=productivity />
            <ScoreBar label="Consistency" value=consistency />
            <ScoreBar label="Quality" value=quality />
            <ScoreBar label="Collaboration" value=collaboration />
        </div>
    }
}
