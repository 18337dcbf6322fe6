// Host browser capabilities the background core talks to.
// chrome::ChromeHost is the real implementation; tests use a recording fake.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Browser tab id. Resolved fresh for every operation, never cached.
pub type TabId = i32;

/// Outcome of messaging a tab. Callers never branch on it beyond logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    TargetUnavailable,
}

/// Bare command tokens understood by the on-page keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabCommand {
    OpenKeyboard,
    CloseKeyboard,
    OpenUrlBar,
}

impl TabCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabCommand::OpenKeyboard => "openKeyboard",
            TabCommand::CloseKeyboard => "closeKeyboard",
            TabCommand::OpenUrlBar => "openUrlBar",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TabMessage {
    Command(TabCommand),
    /// A request relayed to the page exactly as it arrived
    Forward(Value),
}

impl TabMessage {
    pub fn to_json(&self) -> Value {
        match self {
            TabMessage::Command(command) => Value::String(command.as_str().to_string()),
            TabMessage::Forward(request) => request.clone(),
        }
    }
}

#[async_trait(?Send)]
pub trait TabsHost {
    /// Active tab of the focused window, if there is one
    async fn active_tab(&self) -> Option<TabId>;

    async fn send_message(&self, tab: TabId, message: &TabMessage) -> Delivery;

    async fn create_tab(&self, url: &str) -> Result<()>;
}

/// The toolbar action button of one tab
#[async_trait(?Send)]
pub trait ActionHost {
    async fn set_icon(&self, tab: TabId, path: &str) -> Result<()>;

    async fn set_enabled(&self, tab: TabId, enabled: bool) -> Result<()>;
}

pub trait Host: TabsHost + ActionHost {}

impl<T: TabsHost + ActionHost> Host for T {}
