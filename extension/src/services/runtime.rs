// chrome.runtime from the popup's side

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::to_js;
use crate::error::{ExtensionError, Result};
use crate::popup::{OptionsPage, PopupHost};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime"], js_name = sendMessage)]
    fn send_message(message: &JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    fn get_url(path: &str) -> String;
}

/// `chrome.runtime.openOptionsPage`, if this browser has it
fn native_options_page() -> Option<js_sys::Function> {
    let chrome = js_sys::Reflect::get(&js_sys::global(), &"chrome".into()).ok()?;
    let runtime = js_sys::Reflect::get(&chrome, &"runtime".into()).ok()?;
    js_sys::Reflect::get(&runtime, &"openOptionsPage".into())
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
        .map(|f| f.bind(&runtime))
}

#[derive(Clone, Copy, Default)]
pub struct ChromePopupHost;

#[async_trait(?Send)]
impl PopupHost for ChromePopupHost {
    async fn send_request(&self, request: Value) {
        let message = match to_js(&request) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("Could not encode request: {}", e);
                return;
            }
        };

        // The reply is not used; only wait so the channel is not dropped early
        match send_message(&message) {
            Ok(promise) => {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("runtime.sendMessage rejected: {:?}", e);
                }
            }
            Err(e) => log::debug!("runtime.sendMessage threw: {:?}", e),
        }
    }

    async fn open_options_page(&self) -> Result<OptionsPage> {
        let Some(open) = native_options_page() else {
            return Ok(OptionsPage::Unsupported);
        };
        let result = open.call0(&JsValue::UNDEFINED).map_err(ExtensionError::from_js)?;
        if let Some(promise) = result.dyn_ref::<js_sys::Promise>() {
            JsFuture::from(promise.clone())
                .await
                .map_err(ExtensionError::from_js)?;
        }
        Ok(OptionsPage::Opened)
    }

    async fn open_page(&self, path: &str) -> Result<()> {
        let window =
            web_sys::window().ok_or_else(|| ExtensionError::Js("no window".to_string()))?;
        window
            .open_with_url(&get_url(path))
            .map_err(ExtensionError::from_js)?;
        Ok(())
    }
}
