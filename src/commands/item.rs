//! Item Commands
//!
//! Frontend bindings for the item list commands. All of them answer with the
//! backend view state after the operation.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::ViewState;
use super::call;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct SubmitArgs<'a> {
    text: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_view_state() -> Result<ViewState, String> {
    call("get_view_state", JsValue::NULL).await
}

pub async fn fetch_items() -> Result<ViewState, String> {
    call("fetch_items", JsValue::NULL).await
}

pub async fn submit_item(text: &str) -> Result<ViewState, String> {
    let js_args = serde_wasm_bindgen::to_value(&SubmitArgs { text }).map_err(|e| e.to_string())?;
    call("submit_item", js_args).await
}

pub async fn begin_edit(id: u32) -> Result<ViewState, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    call("begin_edit", js_args).await
}

pub async fn cancel_edit() -> Result<ViewState, String> {
    call("cancel_edit", JsValue::NULL).await
}

pub async fn remove_item(id: u32) -> Result<ViewState, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    call("remove_item", js_args).await
}
