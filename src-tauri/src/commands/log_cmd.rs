//! Diagnostics Commands

/// Recent backend log lines, oldest first
#[tauri::command]
pub fn get_recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
