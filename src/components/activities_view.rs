//! Activities Component
//!
//! Activity tracking for one case or one analyst: load a snapshot, filter
//! it client-side, add/edit/delete records, and (for analyst scope) show
//! the derived performance card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ActivityForm, ConfirmDelete, PerformanceCard};
use crate::context::SessionContext;
use crate::fetch::FetchGen;
use crate::filter::{filter_activities, ActivityFilter};
use crate::models::{
    Activity, ActivityStatus, ActivitySummary, ActivityType, CaseDetail, ACTIVITY_STATUSES,
    ACTIVITY_TYPES,
};
use crate::store::{store_push_toast, use_app_store, ToastKind};

/// Whose activity list is loaded
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    Case,
    Analyst,
}

/// Activity list with scope picker, filters and CRUD
#[component]
pub fn ActivitiesView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_app_store();

    let (scope, set_scope) = signal(Scope::Case);
    let (scope_id_input, set_scope_id_input) = signal(String::new());
    let (loaded, set_loaded) = signal::<Option<(Scope, u64)>>(None);
    let (load_trigger, set_load_trigger) = signal(0u32);

    let (activities, set_activities) = signal(Vec::<Activity>::new());
    let (case_header, set_case_header) = signal::<Option<CaseDetail>>(None);
    let (summary, set_summary) = signal(ActivitySummary::default());
    let (loading, set_loading) = signal(false);
    let fetch_gen = FetchGen::new();

    // Client-side filter inputs
    let (type_filter, set_type_filter) = signal(String::from("all"));
    let (status_filter, set_status_filter) = signal(String::from("all"));
    let (analyst_filter, set_analyst_filter) = signal(String::new());
    let (search, set_search) = signal(String::new());

    let (adding, set_adding) = signal(false);
    let (editing, set_editing) = signal::<Option<Activity>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let _ = load_trigger.get();
        let Some((scope, id)) = loaded.get() else {
            return;
        };

        let generation = fetch_gen.begin();
        set_loading.set(true);

        let fetch_gen = fetch_gen.clone();
        spawn_local(async move {
            let result = match scope {
                Scope::Case => api::list_case_activities(id).await,
                Scope::Analyst => api::list_analyst_activities(id).await,
            };
            if !fetch_gen.is_current(generation) {
                // Superseded by a newer load
                return;
            }
            match result {
                Ok(loaded) => set_activities.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[activities] load failed: {}", e).into());
                    set_activities.set(Vec::new());
                    store_push_toast(&store, "Failed to load activities", ToastKind::Error);
                }
            }

            match scope {
                Scope::Case => {
                    let detail = api::get_case(id).await;
                    if !fetch_gen.is_current(generation) {
                        return;
                    }
                    match detail {
                        Ok(detail) => set_case_header.set(Some(detail)),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[activities] case header failed: {}", e).into(),
                            );
                            set_case_header.set(None);
                        }
                    }
                }
                Scope::Analyst => set_case_header.set(None),
            }

            let summary_result = match scope {
                Scope::Case => api::case_activity_summary(id).await,
                Scope::Analyst => api::analyst_activity_summary(id).await,
            };
            if !fetch_gen.is_current(generation) {
                return;
            }
            match summary_result {
                Ok(loaded) => set_summary.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[activities] summary failed: {}", e).into());
                    set_summary.set(ActivitySummary::default());
                }
            }
            set_loading.set(false);
        });
    });

    let on_load = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(id) = scope_id_input.get().trim().parse::<u64>() else {
            store_push_toast(&store, "Enter a numeric id", ToastKind::Error);
            return;
        };
        set_editing.set(None);
        set_adding.set(false);
        set_loaded.set(Some((scope.get(), id)));
        set_load_trigger.update(|v| *v += 1);
    };

    let visible = Memo::new(move |_| {
        let filter = ActivityFilter {
            activity_type: ActivityType::from_value(&type_filter.get()),
            status: ActivityStatus::from_value(&status_filter.get()),
            analyst_id: analyst_filter.get().trim().parse().ok(),
            search: search.get(),
        };
        filter_activities(&activities.get(), &filter)
    });

    let form_done = Callback::new(move |_: ()| {
        set_adding.set(false);
        set_editing.set(None);
        set_load_trigger.update(|v| *v += 1);
    });

    let delete_activity = move |case_id: u64, activity_id: u64| {
        spawn_local(async move {
            match api::delete_activity(case_id, activity_id).await {
                Ok(()) => {
                    store_push_toast(&store, "Activity deleted", ToastKind::Success);
                    set_load_trigger.update(|v| *v += 1);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[activities] delete failed: {}", e).into());
                    store_push_toast(&store, "Failed to delete activity", ToastKind::Error);
                }
            }
        });
    };

    let is_analyst_scope = move || matches!(loaded.get(), Some((Scope::Analyst, _)));
    let loaded_case_id = move || match loaded.get() {
        Some((Scope::Case, id)) => Some(id),
        _ => None,
    };

    view! {
        <div class="activities-view">
            <div class="panel-header">
                <h2>"Activities"</h2>
            </div>

            <form class="scope-bar" on:submit=on_load>
                <div class="type-selector">
                    <button
                        type="button"
                        class=move || if scope.get() == Scope::Case { "type-btn active" } else { "type-btn" }
                        on:click=move |_| set_scope.set(Scope::Case)
                    >
                        "Case"
                    </button>
                    <button
                        type="button"
                        class=move || if scope.get() == Scope::Analyst { "type-btn active" } else { "type-btn" }
                        on:click=move |_| set_scope.set(Scope::Analyst)
                    >
                        "Analyst"
                    </button>
                </div>
                <input
                    type="text"
                    placeholder=move || match scope.get() {
                        Scope::Case => "Case id",
                        Scope::Analyst => "Analyst id",
                    }
                    prop:value=move || scope_id_input.get()
                    on:input=move |ev| set_scope_id_input.set(event_target_value(&ev))
                />
                <button type="submit">"Load"</button>
            </form>

            {move || loaded.get().map(|_| view! {
                <div>
                    {move || case_header.get().map(|detail| view! {
                        <div class="case-header">
                            <span class="mono">{detail.summary.case_number.clone()}</span>
                            <span class="case-header-title">{detail.summary.title.clone()}</span>
                            <span class="status-chip">{detail.summary.status.label()}</span>
                            {detail.description.clone().map(|d| view! {
                                <span class="case-header-desc">{d}</span>
                            })}
                        </div>
                    })}

                    <div class="summary-strip">
                        {move || {
                            let s = summary.get();
                            format!(
                                "{} activities · {} completed · {} in report · {} min logged",
                                s.total_activities, s.completed, s.in_report, s.total_minutes
                            )
                        }}
                    </div>

                    <div class="filter-bar">
                        <select
                            prop:value=move || type_filter.get()
                            on:change=move |ev| set_type_filter.set(event_target_value(&ev))
                        >
                            <option value="all">"All types"</option>
                            {ACTIVITY_TYPES.iter().map(|t| view! {
                                <option value=t.as_str()>{t.label()}</option>
                            }).collect_view()}
                        </select>

                        <select
                            prop:value=move || status_filter.get()
                            on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                        >
                            <option value="all">"All statuses"</option>
                            {ACTIVITY_STATUSES.iter().map(|s| view! {
                                <option value=s.as_str()>{s.label()}</option>
                            }).collect_view()}
                        </select>

                        <input
                            type="text"
                            placeholder="Analyst id"
                            prop:value=move || analyst_filter.get()
                            on:input=move |ev| set_analyst_filter.set(event_target_value(&ev))
                        />

                        <input
                            class="search-input"
                            type="text"
                            placeholder="Search title or description..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />

                        {move || loaded_case_id().map(|_| view! {
                            <button class="add-btn" on:click=move |_| {
                                set_editing.set(None);
                                set_adding.update(|v| *v = !*v);
                            }>
                                "New activity"
                            </button>
                        })}
                    </div>

                    <Show when=move || loading.get()>
                        <div class="loading">"Loading..."</div>
                    </Show>

                    {move || {
                        if let Some(activity) = editing.get() {
                            view! {
                                <ActivityForm
                                    case_id=activity.case_id
                                    editing=activity
                                    on_done=form_done
                                />
                            }.into_any()
                        } else if adding.get() {
                            match loaded_case_id() {
                                Some(case_id) => view! {
                                    <ActivityForm case_id=case_id on_done=form_done />
                                }.into_any(),
                                None => view! { <div></div> }.into_any(),
                            }
                        } else {
                            view! { <div></div> }.into_any()
                        }
                    }}

                    <div class="activity-list">
                        <For
                            each=move || visible.get()
                            key=|a| a.id
                            children=move |activity| {
                                let case_id = activity.case_id;
                                let id = activity.id;
                                let edit_copy = activity.clone();
                                let subject = activity.title.clone();
                                let on_delete = Callback::new(move |_: ()| delete_activity(case_id, id));
                                view! {
                                    <div class="activity-row">
                                        <div class="activity-main">
                                            <span class="activity-type">{activity.activity_type.label()}</span>
                                            <span class="activity-title">{activity.title.clone()}</span>
                                            <span class="activity-status">{activity.status.label()}</span>
                                            <span class="activity-priority">{activity.priority.label()}</span>
                                            <span class="activity-date">
                                                {activity.activity_date.format("%Y-%m-%d").to_string()}
                                            </span>
                                            <span class="activity-minutes">
                                                {format!("{} min", activity.time_spent_minutes)}
                                            </span>
                                            {activity.include_in_report.then(|| view! {
                                                <span class="flag" title="Included in report">"📄"</span>
                                            })}
                                            {activity.is_confidential.then(|| view! {
                                                <span class="flag" title="Confidential">"🔒"</span>
                                            })}
                                        </div>
                                        {(!activity.tags.is_empty()).then(|| view! {
                                            <div class="activity-tags">
                                                {activity.tags.iter().map(|t| view! {
                                                    <span class="tag-chip">{t.clone()}</span>
                                                }).collect_view()}
                                            </div>
                                        })}
                                        <div class="activity-actions">
                                            <button on:click=move |_| {
                                                set_adding.set(false);
                                                set_editing.set(Some(edit_copy.clone()));
                                            }>
                                                "Edit"
                                            </button>
                                            <ConfirmDelete subject=subject on_confirm=on_delete />
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    {move || if visible.get().is_empty() && !loading.get() {
                        view! { <div class="empty-message">"No activities match"</div> }.into_any()
                    } else {
                        view! { <div></div> }.into_any()
                    }}

                    {move || is_analyst_scope().then(|| view! {
                        <PerformanceCard activities=activities />
                    })}
                </div>
            })}
        </div>
    }
}
