//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the sync controller.

mod item_cmd;
mod config_cmd;
mod log_cmd;

pub use item_cmd::*;
pub use config_cmd::*;
pub use log_cmd::*;
