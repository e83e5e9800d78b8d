//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only truly
//! app-wide state lives here (session + toast queue); each view owns its
//! own fetched list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::{Role, SessionUser};

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One non-blocking notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated session, None until init or after sign-out
    pub session: Option<SessionUser>,
    /// Active notifications, newest last
    pub toasts: Vec<Toast>,
    /// Monotonic toast id source
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// True when the signed-in user is an admin
pub fn store_is_admin(store: &AppStore) -> bool {
    store.session().read().as_ref().is_some_and(|u| u.role == Role::Admin)
}

/// Push a toast and schedule its auto-dismiss
pub fn store_push_toast(store: &AppStore, message: impl Into<String>, kind: ToastKind) {
    let id = {
        let next_toast_id = store.next_toast_id();
        let mut next = next_toast_id.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, message: message.into(), kind });

    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        store_remove_toast(&store, id);
    });
}

/// Remove a toast by id (auto-dismiss or manual close)
pub fn store_remove_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|t| t.id != id);
}
