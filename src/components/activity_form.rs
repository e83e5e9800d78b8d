//! Activity Form Component
//!
//! Create/edit form covering every mutable Activity field. The same form
//! serves both flows; editing pre-fills from the existing record.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ActivityPayload};
use crate::models::{
    Activity, ActivityStatus, ActivityType, Priority, ACTIVITY_STATUSES, ACTIVITY_TYPES,
    PRIORITIES,
};
use crate::store::{store_push_toast, use_app_store, ToastKind};

/// Form for creating or editing one activity
#[component]
pub fn ActivityForm(
    case_id: u64,
    #[prop(into, optional)] editing: Option<Activity>,
    #[prop(into)] on_done: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    let editing_ids = editing.as_ref().map(|a| (a.case_id, a.id));
    let is_edit = editing_ids.is_some();

    let (title, set_title) = signal(editing.as_ref().map(|a| a.title.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(editing.as_ref().map(|a| a.description.clone()).unwrap_or_default());
    let (activity_type, set_activity_type) = signal(
        editing.as_ref().map(|a| a.activity_type.as_str().to_string())
            .unwrap_or_else(|| "note".to_string()),
    );
    let (status, set_status) = signal(
        editing.as_ref().map(|a| a.status.as_str().to_string())
            .unwrap_or_else(|| "open".to_string()),
    );
    let (priority, set_priority) = signal(
        editing.as_ref().map(|a| a.priority.as_str().to_string())
            .unwrap_or_else(|| "medium".to_string()),
    );
    let (tags, set_tags) =
        signal(editing.as_ref().map(|a| a.tags.join(", ")).unwrap_or_default());
    let (date, set_date) = signal(
        editing.as_ref()
            .map(|a| a.activity_date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
    );
    let (minutes, set_minutes) = signal(
        editing.as_ref().map(|a| a.time_spent_minutes.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (include_in_report, set_include_in_report) =
        signal(editing.as_ref().map(|a| a.include_in_report).unwrap_or(false));
    let (is_confidential, set_is_confidential) =
        signal(editing.as_ref().map(|a| a.is_confidential).unwrap_or(false));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title = title.get();
        if title.trim().is_empty() {
            store_push_toast(&store, "Title is required", ToastKind::Error);
            return;
        }
        // Midday UTC keeps the date stable across timezone display
        let Some(activity_date) = NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(|dt| dt.and_utc())
        else {
            store_push_toast(&store, "Activity date is invalid", ToastKind::Error);
            return;
        };
        let Ok(time_spent_minutes) = minutes.get().trim().parse::<u32>() else {
            store_push_toast(&store, "Time spent must be a whole number of minutes", ToastKind::Error);
            return;
        };

        let description = description.get();
        let activity_type =
            ActivityType::from_value(&activity_type.get()).unwrap_or(ActivityType::Note);
        let status = ActivityStatus::from_value(&status.get()).unwrap_or(ActivityStatus::Open);
        let priority = Priority::from_value(&priority.get()).unwrap_or(Priority::Medium);
        let tag_list: Vec<String> = tags
            .get()
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        spawn_local(async move {
            let payload = ActivityPayload {
                activity_type,
                title: &title,
                description: &description,
                status,
                tags: &tag_list,
                priority,
                activity_date,
                time_spent_minutes,
                include_in_report: include_in_report.get_untracked(),
                is_confidential: is_confidential.get_untracked(),
            };
            let result = match editing_ids {
                Some((case_id, activity_id)) => {
                    api::update_activity(case_id, activity_id, &payload).await.map(|_| ())
                }
                None => api::create_activity(case_id, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    store_push_toast(&store, "Activity saved", ToastKind::Success);
                    on_done.run(());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[activity] save failed: {}", e).into());
                    store_push_toast(&store, "Failed to save activity", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <form class="activity-form" on:submit=on_submit>
            <h4>{if is_edit { "Edit activity" } else { "New activity" }}</h4>

            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <div class="form-row">
                <select
                    prop:value=move || activity_type.get()
                    on:change=move |ev| set_activity_type.set(event_target_value(&ev))
                >
                    {ACTIVITY_TYPES.iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    {ACTIVITY_STATUSES.iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    prop:value=move || priority.get()
                    on:change=move |ev| set_priority.set(event_target_value(&ev))
                >
                    {PRIORITIES.iter().map(|p| view! {
                        <option value=p.as_str()>{p.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-row">
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Minutes"
                    prop:value=move || minutes.get()
                    on:input=move |ev| set_minutes.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Tags (comma-separated)"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </div>

            <div class="form-row checkboxes">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || include_in_report.get()
                        on:change=move |_| set_include_in_report.update(|v| *v = !*v)
                    />
                    "Include in report"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || is_confidential.get()
                        on:change=move |_| set_is_confidential.update(|v| *v = !*v)
                    />
                    "Confidential"
                </label>
            </div>

            <div class="form-row">
                <button type="submit">{if is_edit { "Save" } else { "Add" }}</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_done.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
