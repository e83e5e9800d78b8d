//! Toast Host Component
//!
//! Bottom-right notification queue. Toasts auto-dismiss (see store) or can
//! be clicked away.

use leptos::prelude::*;

use crate::store::{store_remove_toast, use_app_store, AppStateStoreFields, ToastKind};

/// Renders the active toast queue
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_remove_toast(&store, id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
