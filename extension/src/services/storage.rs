// Chrome Storage API Integration
// Settings live flat in chrome.storage.local

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{from_js, to_js};
use crate::error::{ExtensionError, Result};
use crate::settings::{Settings, SettingsStore};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"])]
    fn get(keys: JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"])]
    fn set(items: JsValue) -> std::result::Result<js_sys::Promise, JsValue>;
}

pub struct ChromeStorage;

impl ChromeStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChromeStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SettingsStore for ChromeStorage {
    async fn get(&self, keys: &[&str]) -> Result<Settings> {
        let key_list = js_sys::Array::new();
        for key in keys {
            key_list.push(&JsValue::from_str(key));
        }

        let promise = get(key_list.into()).map_err(ExtensionError::storage_from_js)?;
        let result = JsFuture::from(promise)
            .await
            .map_err(ExtensionError::storage_from_js)?;

        match from_js(&result)? {
            serde_json::Value::Object(items) => Ok(items),
            serde_json::Value::Null => Ok(Settings::new()),
            other => Err(ExtensionError::Storage(format!(
                "storage.local.get returned {}",
                other
            ))),
        }
    }

    async fn set(&self, items: Settings) -> Result<()> {
        let obj = to_js(&serde_json::Value::Object(items))?;
        let promise = set(obj).map_err(ExtensionError::storage_from_js)?;
        JsFuture::from(promise)
            .await
            .map_err(ExtensionError::storage_from_js)?;
        Ok(())
    }
}
