// chrome.tabs: active tab lookup, page messaging, new tabs

use async_trait::async_trait;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{to_js, ChromeHost};
use crate::error::{ExtensionError, Result};
use crate::host::{Delivery, TabId, TabMessage, TabsHost};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"])]
    fn query(query_info: &JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    fn send_message(tab_id: i32, message: &JsValue)
        -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"])]
    fn create(create_properties: &JsValue) -> std::result::Result<js_sys::Promise, JsValue>;
}

async fn query_active_tab() -> Result<Option<TabId>> {
    let query_info = to_js(&json!({ "active": true, "currentWindow": true }))?;
    let promise = query(&query_info).map_err(ExtensionError::from_js)?;
    let tabs = JsFuture::from(promise)
        .await
        .map_err(ExtensionError::from_js)?;

    let first = js_sys::Array::from(&tabs).get(0);
    if first.is_undefined() {
        return Ok(None);
    }

    let id = js_sys::Reflect::get(&first, &"id".into()).map_err(ExtensionError::from_js)?;
    Ok(id.as_f64().map(|id| id as TabId))
}

async fn deliver(tab: TabId, message: &TabMessage) -> Result<()> {
    let payload = to_js(&message.to_json())?;
    let promise = send_message(tab, &payload).map_err(ExtensionError::from_js)?;
    JsFuture::from(promise)
        .await
        .map_err(ExtensionError::from_js)?;
    Ok(())
}

#[async_trait(?Send)]
impl TabsHost for ChromeHost {
    async fn active_tab(&self) -> Option<TabId> {
        match query_active_tab().await {
            Ok(tab) => tab,
            Err(e) => {
                log::warn!("tabs.query failed: {}", e);
                None
            }
        }
    }

    async fn send_message(&self, tab: TabId, message: &TabMessage) -> Delivery {
        match deliver(tab, message).await {
            Ok(()) => Delivery::Delivered,
            Err(e) => {
                // No content script listening, tab closed or navigated away
                log::debug!("tabs.sendMessage({}) failed: {}", tab, e);
                Delivery::TargetUnavailable
            }
        }
    }

    async fn create_tab(&self, url: &str) -> Result<()> {
        let props = to_js(&json!({ "url": url }))?;
        let promise = create(&props).map_err(ExtensionError::from_js)?;
        JsFuture::from(promise)
            .await
            .map_err(ExtensionError::from_js)?;
        Ok(())
    }
}
