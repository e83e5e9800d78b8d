//! Dashboard Component
//!
//! Aggregate stat cards, recent platform activity and third-party
//! integration health. Admin-gated with an explanatory notice fallback.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::RoleNotice;
use crate::context::SessionContext;
use crate::fetch::FetchGen;
use crate::models::{AdminActivityItem, AdminStats, ApiIntegrationStatus};
use crate::store::{store_is_admin, store_push_toast, use_app_store, ToastKind};

#[component]
fn StatCard(label: &'static str, value: Memo<u32>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Admin dashboard panel
#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_context::<SessionContext>().expect("SessionContext should be provided");
    let store = use_app_store();

    let (stats, set_stats) = signal(AdminStats::default());
    let (recent, set_recent) = signal(Vec::<AdminActivityItem>::new());
    let (integrations, set_integrations) = signal(Vec::<ApiIntegrationStatus>::new());
    let (loading, set_loading) = signal(false);
    let fetch_gen = FetchGen::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if !store_is_admin(&store) {
            return;
        }
        let generation = fetch_gen.begin();
        set_loading.set(true);
        let fetch_gen = fetch_gen.clone();
        spawn_local(async move {
            let stats_result = api::admin_stats().await;
            if !fetch_gen.is_current(generation) {
                // Superseded by a newer reload
                return;
            }
            match stats_result {
                Ok(loaded) => set_stats.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[dashboard] stats failed: {}", e).into());
                    set_stats.set(AdminStats::default());
                    store_push_toast(&store, "Failed to load dashboard stats", ToastKind::Error);
                }
            }
            let activity_result = api::admin_activity().await;
            if !fetch_gen.is_current(generation) {
                return;
            }
            match activity_result {
                Ok(loaded) => set_recent.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[dashboard] activity failed: {}", e).into());
                    set_recent.set(Vec::new());
                    store_push_toast(&store, "Failed to load recent activity", ToastKind::Error);
                }
            }
            let status_result = api::api_status().await;
            if !fetch_gen.is_current(generation) {
                return;
            }
            match status_result {
                Ok(loaded) => set_integrations.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[dashboard] api status failed: {}", e).into());
                    set_integrations.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let total_users = Memo::new(move |_| stats.get().total_users);
    let total_cases = Memo::new(move |_| stats.get().total_cases);
    let total_sources = Memo::new(move |_| stats.get().total_sources);
    let total_keywords = Memo::new(move |_| stats.get().total_keywords);

    view! {
        <div class="dashboard">
            {move || if !store_is_admin(&store) {
                view! {
                    <RoleNotice message="Dashboard statistics are limited to administrators." />
                }.into_any()
            } else {
                view! {
                    <div>
                        <div class="panel-header">
                            <h2>"Dashboard"</h2>
                            <button class="reload-btn" on:click=move |_| ctx.reload()>"Reload"</button>
                        </div>

                        <Show when=move || loading.get()>
                            <div class="loading">"Loading..."</div>
                        </Show>

                        <div class="stats-grid">
                            <StatCard label="Users" value=total_users />
                            <StatCard label="Cases" value=total_cases />
                            <StatCard label="Sources" value=total_sources />
                            <StatCard label="Keywords" value=total_keywords />
                        </div>

                        <div class="card">
                            <h3>"Integrations"</h3>
                            <div class="badge-row">
                                <For
                                    each=move || integrations.get()
                                    key=|i| i.name.clone()
                                    children=move |integration| {
                                        let class = if integration.healthy { "badge ok" } else { "badge err" };
                                        view! {
                                            <span class=class>
                                                {if integration.healthy { "● " } else { "○ " }}
                                                {integration.name.clone()}
                                            </span>
                                        }
                                    }
                                />
                            </div>
                        </div>

                        <div class="card">
                            <h3>"Recent activity"</h3>
                            <table>
                                <thead>
                                    <tr><th>"When"</th><th>"Who"</th><th>"What"</th></tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || recent.get()
                                        key=|item| item.id
                                        children=move |item| {
                                            view! {
                                                <tr>
                                                    <td>{item.created_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                                    <td>{item.actor.clone()}</td>
                                                    <td>{item.action.clone()}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                            {move || if recent.get().is_empty() {
                                view! { <div class="empty-message">"No recent activity"</div> }.into_any()
                            } else {
                                view! { <div></div> }.into_any()
                            }}
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
