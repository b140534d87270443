//! Tauri Commands for the item list
//!
//! Every command answers with the resulting `ViewState`. Load and write
//! errors are handled inside the controller (notified or logged), so they do
//! not fail the command.

use tauri::State;
use item_sync::ViewState;
use crate::AppState;

/// Current view state, used by the frontend on mount
#[tauri::command]
pub async fn get_view_state(state: State<'_, AppState>) -> Result<ViewState, String> {
    Ok(state.controller().await.snapshot())
}

/// Reload the whole collection
#[tauri::command]
pub async fn fetch_items(state: State<'_, AppState>) -> Result<ViewState, String> {
    let controller = state.controller().await;
    let _ = controller.fetch_all().await;
    Ok(controller.snapshot())
}

/// Stage `text` as the draft and submit it (create, or save the edit in progress)
#[tauri::command]
pub async fn submit_item(state: State<'_, AppState>, text: String) -> Result<ViewState, String> {
    let controller = state.controller().await;
    controller.set_draft_text(text);
    let outcome = controller.submit_draft().await;
    log::debug!("Submit outcome: {:?}", outcome);
    Ok(controller.snapshot())
}

/// Start editing an item from the current list
#[tauri::command]
pub async fn begin_edit(state: State<'_, AppState>, id: u32) -> Result<ViewState, String> {
    let controller = state.controller().await;
    let item = controller
        .snapshot()
        .find_item(id)
        .cloned()
        .ok_or_else(|| format!("Item {} not found", id))?;
    controller.begin_edit(&item);
    Ok(controller.snapshot())
}

#[tauri::command]
pub async fn cancel_edit(state: State<'_, AppState>) -> Result<ViewState, String> {
    let controller = state.controller().await;
    controller.cancel_edit();
    Ok(controller.snapshot())
}

/// Delete an item and reload
#[tauri::command]
pub async fn remove_item(state: State<'_, AppState>, id: u32) -> Result<ViewState, String> {
    let controller = state.controller().await;
    let _ = controller.remove(id).await;
    Ok(controller.snapshot())
}
