//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
}

/// Snapshot of the backend view state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub items: Vec<Item>,
    pub draft_text: String,
    pub edit_target_id: Option<u32>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub api_url: String,
}

/// Payload of the `sync-error` event
#[derive(Debug, Clone, Deserialize)]
pub struct SyncError {
    pub title: String,
    pub message: String,
}
