//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod item;
mod config;
mod logs;
mod events;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a command and decode its result. A rejected promise carries the
/// command's error string.
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// Re-export all public items
pub use item::*;
pub use config::*;
pub use logs::*;
pub use events::*;
