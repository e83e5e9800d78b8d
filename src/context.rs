//! Application Context
//!
//! Session lifecycle plus app-wide signals provided via Leptos Context API.
//! Session state is explicit: read from client-side storage on load, cleared
//! on sign-out. No ambient globals outside the provided context.

use leptos::prelude::*;

use crate::models::SessionUser;

const USER_KEY: &str = "casedesk_user";
const TOKEN_KEY: &str = "casedesk_token";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Trigger to reload the active view from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the active view from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl SessionContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a wholesale reload of the active view
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Read the signed-in user from client-side storage (sign-in itself is
/// handled by the platform shell, outside this dashboard)
pub fn load_session() -> Option<SessionUser> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            web_sys::console::error_1(&format!("[session] stored user unreadable: {}", e).into());
            None
        }
    }
}

/// Teardown: drop user and token from storage
pub fn clear_session() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
