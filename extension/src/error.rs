//! Error types for the extension core.
//!
//! Nothing in here ever reaches the user: the router, reflector and
//! lifecycle handlers log these and carry on with a degraded result.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    /// `storage.local` rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// A host API call rejected (tab gone, API missing, ...)
    #[error("Browser API error: {0}")]
    Js(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtensionError {
    /// Wrap a rejected promise value, keeping whatever message it carried.
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }

    pub fn storage_from_js(value: JsValue) -> Self {
        Self::Storage(describe_js(&value))
    }
}

impl From<toml::de::Error> for ExtensionError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
