//! Reports Component
//!
//! Listing of generated reports with per-row preview and PDF downloads.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::CasePreviewPanel;
use crate::context::SessionContext;
use crate::download::{report_filename, save_pdf, ReportVariant};
use crate::fetch::FetchGen;
use crate::models::{ReportListItem, ReportPreview};
use crate::store::{store_push_toast, use_app_store, ToastKind};

/// Generated-report list
#[component]
pub fn ReportsView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_app_store();

    let (reports, set_reports) = signal(Vec::<ReportListItem>::new());
    let (loading, set_loading) = signal(false);
    let (preview, set_preview) = signal::<Option<ReportPreview>>(None);
    let fetch_gen = FetchGen::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let generation = fetch_gen.begin();
        set_loading.set(true);
        let fetch_gen = fetch_gen.clone();
        spawn_local(async move {
            let result = api::list_reports().await;
            if !fetch_gen.is_current(generation) {
                // Superseded by a newer reload
                return;
            }
            match result {
                Ok(loaded) => set_reports.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[reports] load failed: {}", e).into());
                    set_reports.set(Vec::new());
                    store_push_toast(&store, "Failed to load reports", ToastKind::Error);
                }
            }
            set_loading.set(false);
        });
    });

    let download = move |report_id: u64, case_number: String, variant: ReportVariant| {
        spawn_local(async move {
            match api::generate_report(report_id, variant.detailed()).await {
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
                                &format!("[reports] save failed: {}", e).into(),
                            );
                            store_push_toast(&store, "Download failed", ToastKind::Error);
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[reports] generate failed: {}", e).into());
                    store_push_toast(&store, "Report generation failed", ToastKind::Error);
                }
            }
        });
    };

    let load_preview = move |report_id: u64| {
        spawn_local(async move {
            match api::report_preview(report_id).await {
                Ok(loaded) => set_preview.set(Some(loaded)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[reports] preview failed: {}", e).into());
                    set_preview.set(None);
                    store_push_toast(&store, "Failed to load preview", ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="reports-view">
            <div class="panel-header">
                <h2>"Reports"</h2>
                <button class="reload-btn" on:click=move |_| ctx.reload()>"Reload"</button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table>
                <thead>
                    <tr>
                        <th>"Case #"</th>
                        <th>"Title"</th>
                        <th>"Generated"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || reports.get()
                        key=|r| r.id
                        children=move |report| {
                            let id = report.id;
                            let number_basic = report.case_number.clone();
                            let number_detailed = report.case_number.clone();
                            view! {
                                <tr>
                                    <td class="mono">{report.case_number.clone()}</td>
                                    <td>{report.title.clone()}</td>
                                    <td>{report.created_at.format("%Y-%m-%d").to_string()}</td>
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

            {move || if reports.get().is_empty() && !loading.get() {
                view! { <div class="empty-message">"No reports generated yet"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}

            <CasePreviewPanel preview=preview set_preview=set_preview />
        </div>
    }
}
