// Background service worker for the Virtual Keyboard extension
// Build without default features (no Dioxus); static/background.js is the glue
// that registers the Chrome listeners and calls into these exports.

use std::rc::Rc;

use vkeyboard_extension::services::{from_js, to_js, ChromeHost, ChromeStorage};
use vkeyboard_extension::{CoreContext, ExtensionConfig, Lifecycle, Router};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

// Dummy main for binary target
fn main() {}

type Background = CoreContext<ChromeStorage, ChromeHost>;

thread_local! {
    static CONTEXT: Rc<Background> = Rc::new(CoreContext::new(
        ChromeStorage::new(),
        ChromeHost,
        ExtensionConfig::bundled(),
    ));
}

fn context() -> Rc<Background> {
    CONTEXT.with(Rc::clone)
}

/// Initialize background service worker
/// Called once from the JavaScript glue when the worker starts
#[wasm_bindgen]
pub fn init_background() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Virtual Keyboard background service initialized");
}

/// runtime.onInstalled
#[wasm_bindgen]
pub fn handle_install() -> js_sys::Promise {
    let lifecycle = Lifecycle::new(context());
    future_to_promise(async move {
        log::info!("Extension installed or updated");
        lifecycle.on_installed().await;
        Ok(JsValue::UNDEFINED)
    })
}

/// runtime.onMessage: resolves with the response for `sendResponse`.
/// The glue returns `true` from the listener so the sender keeps waiting.
#[wasm_bindgen]
pub fn handle_message(request: JsValue) -> js_sys::Promise {
    let router = Router::new(context());
    future_to_promise(async move {
        let request = match from_js(&request) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Unreadable message: {}", e);
                serde_json::Value::Null
            }
        };

        let response = router.handle(request).await;
        to_js(&response).or_else(|e| {
            log::warn!("Could not encode response: {}", e);
            Ok(js_sys::Object::new().into())
        })
    })
}

/// tabs.onUpdated
#[wasm_bindgen]
pub fn handle_tab_updated(tab_id: i32) -> js_sys::Promise {
    let lifecycle = Lifecycle::new(context());
    future_to_promise(async move {
        lifecycle.on_tab_updated(tab_id).await;
        Ok(JsValue::UNDEFINED)
    })
}
