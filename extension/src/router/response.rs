use serde_json::{json, Value};

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// `{ data: value }`; an absent value serializes as `{}`
    Data(Option<Value>),
    /// `{ data: 'ok' }`
    Ok,
    /// Named settings, absent ones left out
    Fields(Settings),
    /// `{ blocked: true }`
    Blocked,
    /// `{}`
    Empty,
}

impl Response {
    pub fn to_json(&self) -> Value {
        match self {
            Response::Data(Some(value)) => json!({ "data": value }),
            Response::Data(None) | Response::Empty => json!({}),
            Response::Ok => json!({ "data": "ok" }),
            Response::Fields(fields) => Value::Object(fields.clone()),
            Response::Blocked => json!({ "blocked": true }),
        }
    }
}
