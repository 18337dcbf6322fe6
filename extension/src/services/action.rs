// chrome.action: per-tab toolbar icon and enabled state

use async_trait::async_trait;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{to_js, ChromeHost};
use crate::error::{ExtensionError, Result};
use crate::host::{ActionHost, TabId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "action"], js_name = setIcon)]
    fn set_icon(details: &JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "action"])]
    fn enable(tab_id: i32) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "action"])]
    fn disable(tab_id: i32) -> std::result::Result<js_sys::Promise, JsValue>;
}

async fn settle(promise: std::result::Result<js_sys::Promise, JsValue>) -> Result<()> {
    let promise = promise.map_err(ExtensionError::from_js)?;
    JsFuture::from(promise)
        .await
        .map_err(ExtensionError::from_js)?;
    Ok(())
}

#[async_trait(?Send)]
impl ActionHost for ChromeHost {
    async fn set_icon(&self, tab: TabId, path: &str) -> Result<()> {
        let details = to_js(&json!({ "tabId": tab, "path": path }))?;
        settle(set_icon(&details)).await
    }

    async fn set_enabled(&self, tab: TabId, enabled: bool) -> Result<()> {
        if enabled {
            settle(enable(tab)).await
        } else {
            settle(disable(tab)).await
        }
    }
}
