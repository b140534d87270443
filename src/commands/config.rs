//! Collection Config Command Wrappers

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{ResourceConfig, ViewState};
use super::call;

#[derive(Serialize)]
struct SaveConfigArgs<'a> {
    #[serde(rename = "apiUrl")]
    api_url: &'a str,
}

/// Get current collection configuration
pub async fn get_resource_config() -> Result<ResourceConfig, String> {
    call("get_resource_config", JsValue::NULL).await
}

/// Point the app at another collection URL
pub async fn save_resource_config(api_url: &str) -> Result<ViewState, String> {
    let args = serde_wasm_bindgen::to_value(&SaveConfigArgs { api_url })
        .map_err(|e| format!("Serialization error: {}", e))?;
    call("save_resource_config", args).await
}
