//! Collection Config Commands
//!
//! Read and change where the item collection lives.

use tauri::{AppHandle, State};
use item_sync::{load_config, save_config, ResourceConfig, ViewState};
use crate::{build_controller, AppState};

/// Get the saved collection config (default when none saved)
#[tauri::command]
pub fn get_resource_config(state: State<'_, AppState>) -> Result<ResourceConfig, String> {
    Ok(load_config(&state.config_dir))
}

/// Save a new collection URL, point the app at it and reload
#[tauri::command]
pub async fn save_resource_config(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    api_url: String,
) -> Result<ViewState, String> {
    let config = ResourceConfig::new(api_url);
    save_config(&state.config_dir, &config).map_err(|e| e.to_string())?;

    let controller = build_controller(&app_handle, &config)?;
    let previous = std::mem::replace(&mut *state.controller.lock().await, controller.clone());
    // Fetches still running against the old URL must not reach the screen
    previous.retire();
    log::info!("Switched item collection to {}", config.api_url);

    let _ = controller.fetch_all().await;
    Ok(controller.snapshot())
}
