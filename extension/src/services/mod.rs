// Chrome extension API bindings
// Rust side of the host capabilities; only meaningful inside the browser

mod action;
mod runtime;
mod storage;
mod tabs;

pub use runtime::ChromePopupHost;
pub use storage::ChromeStorage;

use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::error::{ExtensionError, Result};

/// Tabs + action button of the running browser
#[derive(Clone, Copy, Default)]
pub struct ChromeHost;

/// serde_json -> JS object, via JSON text
pub fn to_js(value: &Value) -> Result<JsValue> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(ExtensionError::from_js)
}

/// JS value -> serde_json; `undefined` becomes `null`
pub fn from_js(value: &JsValue) -> Result<Value> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text: String = js_sys::JSON::stringify(value)
        .map_err(ExtensionError::from_js)?
        .into();
    Ok(serde_json::from_str(&text)?)
}
