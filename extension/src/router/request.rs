// Inbound requests: `{ method, ...payload }` from any extension surface

use serde::Deserialize;
use serde_json::Value;

/// Method tags as they appear on the wire (misspellings included)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
enum Method {
    GetLocalStorage,
    SetLocalStorage,
    GetSmallKeyboardCoords,
    LoadKeyboardSettings,
    InitLoadKeyboardSettings,
    OpenFromIframe,
    ClickFromIframe,
    #[serde(rename = "toogleKeyboard")]
    ToggleKeyboard,
    #[serde(rename = "toogleKeyboardOn")]
    ToggleKeyboardOn,
    #[serde(rename = "toogleKeyboardDemand")]
    ToggleKeyboardDemand,
    #[serde(rename = "toogleKeyboardOff")]
    ToggleKeyboardOff,
    OpenUrlBar,
    CreateTab,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    GetLocalStorage { key: Option<String> },
    SetLocalStorage { key: Option<String>, value: Option<Value> },
    GetSmallKeyboardCoords,
    LoadKeyboardSettings,
    InitLoadKeyboardSettings,
    /// Carries the complete original request, relayed untouched
    OpenFromIframe(Value),
    ClickFromIframe(Value),
    ToggleKeyboard,
    ToggleKeyboardOn,
    ToggleKeyboardDemand,
    ToggleKeyboardOff,
    OpenUrlBar,
    CreateTab { url: Option<String> },
    /// Unrecognized or missing method tag
    Unknown(Option<String>),
}

impl Request {
    pub fn from_json(raw: Value) -> Self {
        let tag = raw.get("method").and_then(Value::as_str).map(str::to_string);
        let method = tag
            .as_deref()
            .and_then(|m| serde_json::from_value::<Method>(Value::String(m.to_string())).ok())
            .unwrap_or(Method::Unknown);

        let string_field = |name: &str| raw.get(name).and_then(Value::as_str).map(str::to_string);

        match method {
            Method::GetLocalStorage => Request::GetLocalStorage {
                key: string_field("key"),
            },
            Method::SetLocalStorage => Request::SetLocalStorage {
                key: string_field("key"),
                value: raw.get("value").cloned(),
            },
            Method::GetSmallKeyboardCoords => Request::GetSmallKeyboardCoords,
            Method::LoadKeyboardSettings => Request::LoadKeyboardSettings,
            Method::InitLoadKeyboardSettings => Request::InitLoadKeyboardSettings,
            Method::OpenFromIframe => Request::OpenFromIframe(raw),
            Method::ClickFromIframe => Request::ClickFromIframe(raw),
            Method::ToggleKeyboard => Request::ToggleKeyboard,
            Method::ToggleKeyboardOn => Request::ToggleKeyboardOn,
            Method::ToggleKeyboardDemand => Request::ToggleKeyboardDemand,
            Method::ToggleKeyboardOff => Request::ToggleKeyboardOff,
            Method::OpenUrlBar => Request::OpenUrlBar,
            Method::CreateTab => Request::CreateTab {
                url: string_field("url"),
            },
            Method::Unknown => Request::Unknown(tag),
        }
    }

    pub fn method(&self) -> &str {
        match self {
            Request::GetLocalStorage { .. } => "getLocalStorage",
            Request::SetLocalStorage { .. } => "setLocalStorage",
            Request::GetSmallKeyboardCoords => "getSmallKeyboardCoords",
            Request::LoadKeyboardSettings => "loadKeyboardSettings",
            Request::InitLoadKeyboardSettings => "initLoadKeyboardSettings",
            Request::OpenFromIframe(_) => "openFromIframe",
            Request::ClickFromIframe(_) => "clickFromIframe",
            Request::ToggleKeyboard => "toogleKeyboard",
            Request::ToggleKeyboardOn => "toogleKeyboardOn",
            Request::ToggleKeyboardDemand => "toogleKeyboardDemand",
            Request::ToggleKeyboardOff => "toogleKeyboardOff",
            Request::OpenUrlBar => "openUrlBar",
            Request::CreateTab { .. } => "createTab",
            Request::Unknown(tag) => tag.as_deref().unwrap_or("<none>"),
        }
    }
}
