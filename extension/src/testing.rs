// Test doubles for the host browser and the settings store

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::future;
use serde_json::Value;

use crate::error::{ExtensionError, Result};
use crate::host::{ActionHost, Delivery, TabId, TabMessage, TabsHost};
use crate::settings::{MemoryStore, Settings, SettingsStore};

pub fn store_with(items: &[(&str, Value)]) -> MemoryStore {
    MemoryStore::with_items(
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

/// Every call fails, like a storage area that went away
pub struct BrokenStore;

#[async_trait(?Send)]
impl SettingsStore for BrokenStore {
    async fn get(&self, _keys: &[&str]) -> Result<Settings> {
        Err(ExtensionError::Storage("storage unavailable".to_string()))
    }

    async fn set(&self, _items: Settings) -> Result<()> {
        Err(ExtensionError::Storage("storage unavailable".to_string()))
    }
}

/// Records everything the core asks the browser to do
#[derive(Default)]
pub struct FakeHost {
    active: Cell<Option<TabId>>,
    unreachable: Cell<bool>,
    failing_actions: Cell<bool>,
    stall_next_message: Cell<bool>,
    messages: RefCell<Vec<(TabId, Value)>>,
    icons: RefCell<Vec<(TabId, String)>>,
    enabled: RefCell<Vec<(TabId, bool)>>,
    created: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_tab(tab: TabId) -> Self {
        let host = Self::default();
        host.active.set(Some(tab));
        host
    }

    /// Messages to tabs fail as if the page navigated away
    pub fn unreachable_tabs(self) -> Self {
        self.unreachable.set(true);
        self
    }

    /// setIcon / enable / disable reject
    pub fn failing_actions(self) -> Self {
        self.failing_actions.set(true);
        self
    }

    /// The first tab message never settles, like a page listener that
    /// keeps the channel open and never replies
    pub fn stall_first_message(self) -> Self {
        self.stall_next_message.set(true);
        self
    }

    pub fn messages(&self) -> Vec<(TabId, Value)> {
        self.messages.borrow().clone()
    }

    pub fn icons(&self) -> Vec<(TabId, String)> {
        self.icons.borrow().clone()
    }

    pub fn last_icon(&self) -> Option<(TabId, String)> {
        self.icons.borrow().last().cloned()
    }

    pub fn enabled_calls(&self) -> Vec<(TabId, bool)> {
        self.enabled.borrow().clone()
    }

    pub fn created_tabs(&self) -> Vec<String> {
        self.created.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TabsHost for FakeHost {
    async fn active_tab(&self) -> Option<TabId> {
        self.active.get()
    }

    async fn send_message(&self, tab: TabId, message: &TabMessage) -> Delivery {
        if self.stall_next_message.replace(false) {
            future::pending::<()>().await;
        }
        if self.unreachable.get() {
            return Delivery::TargetUnavailable;
        }
        self.messages.borrow_mut().push((tab, message.to_json()));
        Delivery::Delivered
    }

    async fn create_tab(&self, url: &str) -> Result<()> {
        self.created.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[async_trait(?Send)]
impl ActionHost for FakeHost {
    async fn set_icon(&self, tab: TabId, path: &str) -> Result<()> {
        if self.failing_actions.get() {
            return Err(ExtensionError::Js(format!("No tab with id: {}", tab)));
        }
        self.icons.borrow_mut().push((tab, path.to_string()));
        Ok(())
    }

    async fn set_enabled(&self, tab: TabId, enabled: bool) -> Result<()> {
        if self.failing_actions.get() {
            return Err(ExtensionError::Js(format!("No tab with id: {}", tab)));
        }
        self.enabled.borrow_mut().push((tab, enabled));
        Ok(())
    }
}
