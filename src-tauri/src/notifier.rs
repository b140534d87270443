//! User-facing messages for the sync controller.
//!
//! Input prompts become native dialogs; load errors go to the frontend as
//! a `sync-error` event and show up as a toast.

use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use item_sync::Notifier;

pub const SYNC_ERROR_EVENT: &str = "sync-error";

#[derive(Debug, Clone, Serialize)]
pub struct SyncErrorPayload {
    pub title: String,
    pub message: String,
}

pub struct TauriNotifier {
    app: AppHandle,
}

impl TauriNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl Notifier for TauriNotifier {
    fn prompt(&self, message: &str) {
        self.app
            .dialog()
            .message(message)
            .kind(MessageDialogKind::Warning)
            .show(|_| {});
    }

    fn notify_error(&self, title: &str, message: &str) {
        let payload = SyncErrorPayload {
            title: title.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = self.app.emit(SYNC_ERROR_EVENT, payload) {
            log::warn!("Failed to emit {}: {}", SYNC_ERROR_EVENT, e);
        }
    }
}
