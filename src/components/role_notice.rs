//! Role Notice Component
//!
//! Explanatory banner shown in place of admin-only controls. Gating here is
//! advisory; the API boundary is what actually enforces it.

use leptos::prelude::*;

/// Limited-capability notice for non-admin operators
#[component]
pub fn RoleNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="role-notice">
            <span class="role-notice-icon">"🔒"</span>
            <span>{message}</span>
        </div>
    }
}
