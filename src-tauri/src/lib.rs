//! Item List Backend
//!
//! Layered architecture:
//! - item_sync (crate): domain, remote collection client, sync controller
//! - notifier: dialogs and events for user-facing messages
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::{AppHandle, Emitter, Manager};
use tokio::sync::Mutex;

use item_sync::{load_config, CollectionSyncController, HttpItemRepository, ResourceConfig, ViewState};

mod commands;
mod notifier;

use notifier::TauriNotifier;

/// Event carrying the new `ViewState` after every change
pub const VIEW_STATE_EVENT: &str = "view-state-changed";

pub type ItemController = CollectionSyncController<HttpItemRepository>;

/// Application state shared across commands
pub struct AppState {
    /// Swapped out wholesale when the collection URL changes
    pub controller: Mutex<Arc<ItemController>>,
    pub config_dir: PathBuf,
}

impl AppState {
    pub async fn controller(&self) -> Arc<ItemController> {
        self.controller.lock().await.clone()
    }
}

/// Get config directory from app handle
fn get_config_dir(app_handle: &AppHandle) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    Ok(app_dir)
}

/// Controller for `config`, forwarding its state changes to the frontend
pub(crate) fn build_controller(
    app_handle: &AppHandle,
    config: &ResourceConfig,
) -> Result<Arc<ItemController>, String> {
    let repo = HttpItemRepository::new(&config.api_url).map_err(|e| e.to_string())?;
    log::info!("Item collection at {}", repo.base_url());

    let notifier = Arc::new(TauriNotifier::new(app_handle.clone()));
    let controller = Arc::new(CollectionSyncController::new(repo, notifier));

    let handle = app_handle.clone();
    controller.subscribe(move |state: &ViewState| {
        if let Err(e) = handle.emit(VIEW_STATE_EVENT, state) {
            log::warn!("Failed to emit {}: {}", VIEW_STATE_EVENT, e);
        }
    });

    Ok(controller)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "ItemList")?;

            let config_dir = get_config_dir(&app_handle)?;
            let config = load_config(&config_dir);
            let controller = build_controller(&app_handle, &config)?;

            app.manage(AppState {
                controller: Mutex::new(controller.clone()),
                config_dir,
            });

            // First load runs in the background; the screen shows its loading view until then
            tauri::async_runtime::spawn(async move {
                match controller.fetch_all().await {
                    Ok(count) => {
                        let _ = rolling_logger::info(&format!("Initial load: {} items", count));
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Initial load failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Collection sync
            commands::get_view_state,
            commands::fetch_items,
            commands::submit_item,
            commands::begin_edit,
            commands::cancel_edit,
            commands::remove_item,
            // Configuration
            commands::get_resource_config,
            commands::save_resource_config,
            // Diagnostics
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
