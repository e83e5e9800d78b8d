//! Case Preview Panel Component
//!
//! In-page report preview (case header, aggregate statistics, top flagged
//! content) plus the link-user form for the previewed case.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LinkUserArgs};
use crate::models::ReportPreview;
use crate::store::{store_push_toast, use_app_store, ToastKind};

/// Form to link a user to the previewed case with a role and reason
#[component]
fn LinkUserForm(case_id: u64) -> impl IntoView {
    let store = use_app_store();

    let (user_id, set_user_id) = signal(String::new());
    let (role, set_role) = signal(String::from("viewer"));
    let (reason, set_reason) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(user_id) = user_id.get().trim().parse::<u64>() else {
            store_push_toast(&store, "User id must be a number", ToastKind::Error);
            return;
        };
        let role = role.get();
        let reason = reason.get();
        if reason.trim().is_empty() {
            store_push_toast(&store, "A reason is required", ToastKind::Error);
            return;
        }

        spawn_local(async move {
            let args = LinkUserArgs { user_id, role: &role, reason: &reason };
            match api::link_user(case_id, &args).await {
                Ok(()) => {
                    store_push_toast(&store, "User linked to case", ToastKind::Success);
                    set_user_id.set(String::new());
                    set_reason.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[preview] link failed: {}", e).into());
                    store_push_toast(&store, "Failed to link user", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <form class="link-user-form" on:submit=on_submit>
            <h4>"Link user"</h4>
            <input
                type="text"
                placeholder="User id"
                prop:value=move || user_id.get()
                on:input=move |ev| set_user_id.set(event_target_value(&ev))
            />
            <select
                prop:value=move || role.get()
                on:change=move |ev| set_role.set(event_target_value(&ev))
            >
                <option value="viewer">"Viewer"</option>
                <option value="analyst">"Analyst"</option>
                <option value="lead">"Lead"</option>
            </select>
            <input
                type="text"
                placeholder="Reason"
                prop:value=move || reason.get()
                on:input=move |ev| set_reason.set(event_target_value(&ev))
            />
            <button type="submit">"Link"</button>
        </form>
    }
}

/// Slide-in panel showing a report preview without downloading it
#[component]
pub fn CasePreviewPanel(
    preview: ReadSignal<Option<ReportPreview>>,
    set_preview: WriteSignal<Option<ReportPreview>>,
) -> impl IntoView {
    view! {
        {move || preview.get().map(|p| {
            let stats = p.statistics.clone();
            view! {
                <div class="preview-panel">
                    <div class="preview-header">
                        <h3>
                            <span class="mono">{p.case_number.clone()}</span>
                            " — "
                            {p.title.clone()}
                        </h3>
                        <button class="close-btn" on:click=move |_| set_preview.set(None)>"×"</button>
                    </div>

                    <div class="preview-stats">
                        <span>{format!("{} activities", stats.total_activities)}</span>
                        <span>{format!("{} flagged", stats.flagged_content)}</span>
                        <span>{format!("{} sources", stats.sources)}</span>
                        <span class="status-chip">{p.status.label()}</span>
                    </div>

                    <h4>"Top flagged content"</h4>
                    {if p.top_flagged.is_empty() {
                        view! { <div class="empty-message">"Nothing flagged"</div> }.into_any()
                    } else {
                        view! {
                            <ul class="flagged-list">
                                {p.top_flagged.iter().map(|item| view! {
                                    <li>
                                        <span class="flag-severity">{item.severity.label()}</span>
                                        <span class="flag-source">{item.source.clone()}</span>
                                        <span class="flag-excerpt">{item.excerpt.clone()}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }}

                    <LinkUserForm case_id=p.case_id />
                </div>
            }
        })}
    }
}
