//! Local View State
//!
//! What the list screen renders: the mirrored collection plus the input and
//! edit state around it.

use serde::{Deserialize, Serialize};
use super::item::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Contents of the remote collection as of the last successful fetch
    pub items: Vec<Item>,
    /// Text staged in the input field (new name or edit in progress)
    pub draft_text: String,
    /// Id of the item being edited, if any
    pub edit_target_id: Option<u32>,
    /// True while a fetch is in flight
    pub is_loading: bool,
}

impl ViewState {
    /// Starts out loading: the screen waits for the first fetch to settle.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft_text: String::new(),
            edit_target_id: None,
            is_loading: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target_id.is_some()
    }

    /// Label of the button that submits the draft
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Add"
        }
    }

    pub fn find_item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
