//! Casedesk Frontend App
//!
//! Top-level component: session init, nav tab bar, panel routing.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActivitiesView, CasesView, DashboardView, ReportsView, RequestsView, ToastHost,
};
use crate::context::{clear_session, load_session, SessionContext};
use crate::models::Role;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Which main panel is active
#[derive(Clone, Copy, PartialEq, Eq)]
enum Panel {
    Dashboard,
    Cases,
    Activities,
    Reports,
    Requests,
}

const PANELS: &[(Panel, &str)] = &[
    (Panel::Dashboard, "Dashboard"),
    (Panel::Cases, "Cases"),
    (Panel::Activities, "Activities"),
    (Panel::Reports, "Reports"),
    (Panel::Requests, "Requests"),
];

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(SessionContext::new((reload_trigger, set_reload_trigger)));

    // Session init: read the signed-in user from client-side storage
    store.session().set(load_session());

    let (panel, set_panel) = signal(Panel::Cases);

    let sign_out = move |_| {
        clear_session();
        store.session().set(None);
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Casedesk"</h1>
                <div class="session-info">
                    {move || match store.session().get() {
                        Some(user) => view! {
                            <span class="session-user">
                                <span>
                                    {user.name.clone()}
                                    {if user.role == Role::Admin { " (admin)" } else { "" }}
                                </span>
                                <button class="signout-btn" on:click=sign_out>"Sign out"</button>
                            </span>
                        }.into_any(),
                        None => view! {
                            <span class="signed-out">"Not signed in"</span>
                        }.into_any(),
                    }}
                </div>
            </header>

            <nav class="panel-tabs">
                {PANELS.iter().map(|(p, label)| {
                    let p = *p;
                    let is_active = move || panel.get() == p;
                    view! {
                        <button
                            class=move || if is_active() { "panel-tab active" } else { "panel-tab" }
                            on:click=move |_| set_panel.set(p)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <main class="main-content">
                {move || match panel.get() {
                    Panel::Dashboard => view! { <DashboardView /> }.into_any(),
                    Panel::Cases => view! { <CasesView /> }.into_any(),
                    Panel::Activities => view! { <ActivitiesView /> }.into_any(),
                    Panel::Reports => view! { <ReportsView /> }.into_any(),
                    Panel::Requests => view! { <RequestsView /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
