//! Cases Component
//!
//! Case oversight table: server-side filters applied on explicit load,
//! client-side search over the fetched snapshot, per-row preview and PDF
//! downloads (basic and detailed).

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CaseQuery};
use crate::components::CasePreviewPanel;
use crate::context::SessionContext;
use crate::download::{report_filename, save_pdf, ReportVariant};
use crate::fetch::FetchGen;
use crate::filter::search_cases;
use crate::models::{CaseSummary, ReportPreview, CASE_STATUSES, PRIORITIES};
use crate::store::{store_push_toast, use_app_store, ToastKind};

const DEFAULT_PER_PAGE: u32 = 50;

/// Case list with filters, search and report actions
#[component]
pub fn CasesView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_app_store();

    let (cases, set_cases) = signal(Vec::<CaseSummary>::new());
    let (loading, set_loading) = signal(false);
    let (preview, set_preview) = signal::<Option<ReportPreview>>(None);

    // Server-side filter inputs; only read when Apply fires
    let (status_filter, set_status_filter) = signal(String::from("all"));
    let (priority_filter, set_priority_filter) = signal(String::from("all"));
    let (type_filter, set_type_filter) = signal(String::new());
    // Client-side search over the fetched snapshot
    let (search, set_search) = signal(String::new());

    let (apply_trigger, set_apply_trigger) = signal(0u32);
    // Request generation: a superseded fetch must not clobber a newer one
    let fetch_gen = FetchGen::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let _ = apply_trigger.get();

        let generation = fetch_gen.begin();

        let status = status_filter.get_untracked();
        let priority = priority_filter.get_untracked();
        let case_type = type_filter.get_untracked();
        let query = CaseQuery {
            status: (status != "all").then_some(status),
            priority: (priority != "all").then_some(priority),
            case_type: (!case_type.is_empty()).then_some(case_type),
            per_page: DEFAULT_PER_PAGE,
        };

        set_loading.set(true);
        let fetch_gen = fetch_gen.clone();
        spawn_local(async move {
            let result = api::list_cases(&query).await;
            if !fetch_gen.is_current(generation) {
                // Stale response from a superseded request
                return;
            }
            match result {
                Ok(loaded) => set_cases.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[cases] load failed: {}", e).into());
                    set_cases.set(Vec::new());
                    store_push_toast(&store, "Failed to load cases", ToastKind::Error);
                }
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| search_cases(&cases.get(), &search.get()));

    let download = move |case_id: u64, case_number: String, variant: ReportVariant| {
        spawn_local(async move {
            match api::generate_report(case_id, variant.detailed()).await {
                Ok(bytes) => {
                    let filename =
                        report_filename(&case_number, variant, Utc::now().date_naive());
                    match save_pdf(&bytes, &filename) {
                        Ok(()) => store_push_toast(
                            &store,
                            format!("Saved {}", filename),
                            ToastKind::Success,
                        ),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("[cases] save failed: {}", e).into(),
                            );
                            store_push_toast(&store, "Download failed", ToastKind::Error);
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[cases] generate failed: {}", e).into());
                    store_push_toast(&store, "Report generation failed", ToastKind::Error);
                }
            }
        });
    };

    let load_preview = move |case_id: u64| {
        spawn_local(async move {
            match api::report_preview(case_id).await {
                Ok(loaded) => set_preview.set(Some(loaded)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[cases] preview failed: {}", e).into());
                    set_preview.set(None);
                    store_push_toast(&store, "Failed to load preview", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="cases-view">
            <div class="panel-header">
                <h2>"Cases"</h2>
            </div>

            <div class="filter-bar">
                <select
                    prop:value=move || status_filter.get()
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All statuses"</option>
                    {CASE_STATUSES.iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>

                <select
                    prop:value=move || priority_filter.get()
                    on:change=move |ev| set_priority_filter.set(event_target_value(&ev))
                >
                    <option value="all">"All priorities"</option>
                    {PRIORITIES.iter().map(|p| view! {
                        <option value=p.as_str()>{p.label()}</option>
                    }).collect_view()}
                </select>

                <input
                    type="text"
                    placeholder="Case type"
                    prop:value=move || type_filter.get()
                    on:input=move |ev| set_type_filter.set(event_target_value(&ev))
                />

                <button class="apply-btn" on:click=move |_| set_apply_trigger.update(|v| *v += 1)>
                    "Apply"
                </button>

                <input
                    class="search-input"
                    type="text"
                    placeholder="Search title or case number..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="cases-table">
                <thead>
                    <tr>
                        <th>"Case #"</th>
                        <th>"Title"</th>
                        <th>"Status"</th>
                        <th>"Priority"</th>
                        <th>"Type"</th>
                        <th>"Opened"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|case| case.id
                        children=move |case| {
                            let id = case.id;
                            let number_basic = case.case_number.clone();
                            let number_detailed = case.case_number.clone();
                            view! {
                                <tr>
                                    <td class="mono">{case.case_number.clone()}</td>
                                    <td>{case.title.clone()}</td>
                                    <td>{case.status.label()}</td>
                                    <td>{case.priority.label()}</td>
                                    <td>{case.case_type.clone()}</td>
                                    <td>{case.created_at.format("%Y-%m-%d").to_string()}</td>
                                    <td class="actions">
                                        <button on:click=move |_| load_preview(id)>"Preview"</button>
                                        <button on:click=move |_| download(id, number_basic.clone(), ReportVariant::Basic)>
                                            "PDF"
                                        </button>
                                        <button on:click=move |_| download(id, number_detailed.clone(), ReportVariant::Detailed)>
                                            "PDF + activities"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || if visible.get().is_empty() && !loading.get() {
                view! { <div class="empty-message">"No cases match"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}

            <CasePreviewPanel preview=preview set_preview=set_preview />
        </div>
    }
}
