//! Backend Event Listeners

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

pub const VIEW_STATE_EVENT: &str = "view-state-changed";
pub const SYNC_ERROR_EVENT: &str = "sync-error";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen, catch)]
    async fn tauri_listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
struct TauriEvent<T> {
    payload: T,
}

/// Call `handler` with the payload of every `event` for the lifetime of the page
pub async fn listen<T, F>(event: &str, mut handler: F) -> Result<(), String>
where
    T: DeserializeOwned + 'static,
    F: FnMut(T) + 'static,
{
    let name = event.to_string();
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
        match serde_wasm_bindgen::from_value::<TauriEvent<T>>(raw) {
            Ok(event) => handler(event.payload),
            Err(e) => web_sys::console::error_1(&format!("[EVENT] Bad {} payload: {}", name, e).into()),
        }
    });

    tauri_listen(event, &closure)
        .await
        .map_err(|e| format!("Failed to listen for {}: {:?}", event, e))?;
    closure.forget();
    Ok(())
}
