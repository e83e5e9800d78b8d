//! Case Requests Component
//!
//! Case-creation request workflow: any operator can submit a request,
//! admins approve or reject pending ones.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateRequestArgs};
use crate::components::RoleNotice;
use crate::context::SessionContext;
use crate::fetch::FetchGen;
use crate::models::{CaseRequest, Priority, RequestStatus, PRIORITIES};
use crate::store::{store_is_admin, store_push_toast, use_app_store, ToastKind};

/// Form to submit a new case request
#[component]
fn NewRequestForm() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(String::from("medium"));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            store_push_toast(&store, "Title is required", ToastKind::Error);
            return;
        }
        let description = description.get();
        let priority = Priority::from_value(&priority.get()).unwrap_or(Priority::Medium);

        spawn_local(async move {
            let args = CreateRequestArgs {
                title: &title,
                description: &description,
                priority,
            };
            match api::create_case_request(&args).await {
                Ok(_) => {
                    store_push_toast(&store, "Request submitted", ToastKind::Success);
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[requests] create failed: {}", e).into());
                    store_push_toast(&store, "Failed to submit request", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <form class="request-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Case title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Why this case is needed"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <select
                prop:value=move || priority.get()
                on:change=move |ev| set_priority.set(event_target_value(&ev))
            >
                {PRIORITIES.iter().map(|p| view! {
                    <option value=p.as_str()>{p.label()}</option>
                }).collect_view()}
            </select>
            <button type="submit">"Request case"</button>
        </form>
    }
}

/// Case-request list with admin approve/reject
#[component]
pub fn RequestsView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_app_store();

    let (requests, set_requests) = signal(Vec::<CaseRequest>::new());
    let (loading, set_loading) = signal(false);
    let fetch_gen = FetchGen::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let generation = fetch_gen.begin();
        set_loading.set(true);
        let fetch_gen = fetch_gen.clone();
        spawn_local(async move {
            let result = api::list_case_requests().await;
            if !fetch_gen.is_current(generation) {
                // Superseded by a newer reload
                return;
            }
            match result {
                Ok(loaded) => set_requests.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[requests] load failed: {}", e).into());
                    set_requests.set(Vec::new());
                    store_push_toast(&store, "Failed to load case requests", ToastKind::Error);
                }
            }
            set_loading.set(false);
        });
    });

    let decide = move |id: u64, status: RequestStatus| {
        spawn_local(async move {
            match api::update_case_request(id, status).await {
                Ok(_) => {
                    store_push_toast(
                        &store,
                        format!("Request {}", status.label().to_lowercase()),
                        ToastKind::Success,
                    );
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[requests] decision failed: {}", e).into());
                    store_push_toast(&store, "Failed to update request", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="requests-view">
            <div class="panel-header">
                <h2>"Case requests"</h2>
                <button class="reload-btn" on:click=move |_| ctx.reload()>"Reload"</button>
            </div>

            <NewRequestForm />

            {move || if !store_is_admin(&store) {
                view! {
                    <RoleNotice message="Only administrators can approve or reject requests." />
                }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="request-list">
                <For
                    each=move || requests.get()
                    key=|r| r.id
                    children=move |request| {
                        let id = request.id;
                        let is_pending = request.status == RequestStatus::Pending;
                        let status_class = format!("status-chip {}", request.status.as_str());
                        view! {
                            <div class="request-row">
                                <div class="request-main">
                                    <span class=status_class>{request.status.label()}</span>
                                    <span class="request-title">{request.title.clone()}</span>
                                    <span class="request-priority">{request.priority.label()}</span>
                                    <span class="request-by">{request.requested_by.clone()}</span>
                                    <span class="request-date">
                                        {request.created_at.format("%Y-%m-%d").to_string()}
                                    </span>
                                </div>
                                {(!request.description.is_empty()).then(|| view! {
                                    <div class="request-description">{request.description.clone()}</div>
                                })}
                                {move || (is_pending && store_is_admin(&store)).then(|| view! {
                                    <div class="request-actions">
                                        <button
                                            class="approve-btn"
                                            on:click=move |_| decide(id, RequestStatus::Approved)
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="reject-btn"
                                            on:click=move |_| decide(id, RequestStatus::Rejected)
                                        >
                                            "Reject"
                                        </button>
                                    </div>
                                })}
                            </div>
                        }
                    }
                />
            </div>

            {move || if requests.get().is_empty() && !loading.get() {
                view! { <div class="empty-message">"No case requests"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
