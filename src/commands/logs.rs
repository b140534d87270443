use wasm_bindgen::prelude::*;
use super::call;

pub async fn get_recent_logs() -> Result<Vec<String>, String> {
    call("get_recent_logs", JsValue::NULL).await
}
