//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The backend owns
//! the real state; this store mirrors the snapshots it pushes.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use crate::models::{Item, ViewState};

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items as last fetched by the backend
    pub items: Vec<Item>,
    /// Contents of the input field
    pub draft_text: String,
    /// Last draft reported by the backend. Local typing is only overwritten
    /// when this changes, so a refetch does not clobber what is being typed.
    pub backend_draft: String,
    /// Item being edited
    pub edit_target_id: Option<u32>,
    pub is_loading: bool,
    /// Error message currently shown as a toast
    pub toast: Option<String>,
    pub show_settings: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
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

/// Draft the input should switch to when a snapshot arrives, if any.
///
/// The backend's draft only wins when it differs from the one it last sent.
/// An unchanged draft (e.g. a refetch while the user types) leaves the input alone.
fn incoming_draft(last_backend_draft: &str, view_draft: &str) -> Option<String> {
    (last_backend_draft != view_draft).then(|| view_draft.to_string())
}

/// Mirror a backend snapshot into the store
pub fn store_apply_view_state(store: &AppStore, view: ViewState) {
    if let Some(draft) = incoming_draft(&store.backend_draft().get_untracked(), &view.draft_text) {
        *store.draft_text().write() = draft.clone();
        *store.backend_draft().write() = draft;
    }
    *store.items().write() = view.items;
    *store.edit_target_id().write() = view.edit_target_id;
    *store.is_loading().write() = view.is_loading;
}

/// Show a toast that hides itself after a few seconds
pub fn store_show_toast(store: &AppStore, message: String) {
    *store.toast().write() = Some(message.clone());
    let store = *store;
    spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        // Only clear our own message; a newer toast restarts the clock
        if store.toast().get_untracked().as_deref() == Some(message.as_str()) {
            *store.toast().write() = None;
        }
    });
}
