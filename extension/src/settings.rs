// Settings store abstraction
// Flat key -> JSON scalar pairs, backed by chrome.storage.local in the extension

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

/// A set of settings as read from or written to the store.
/// Keys that were never written are simply missing.
pub type Settings = Map<String, Value>;

pub const OPENED_FIRST_TIME: &str = "openedFirstTime";
pub const KEYBOARD_ENABLED: &str = "keyboardEnabled";
/// Legacy availability flag, read only by the tab-update handler
pub const TOOGLE_KEYBOARD: &str = "toogleKeyboard";

pub const SMALL_KEYBOARD: &str = "smallKeyboard";
pub const SMALL_KEYBOARD_TOP: &str = "smallKeyboardTop";
pub const SMALL_KEYBOARD_BOTTOM: &str = "smallKeyboardBottom";
pub const SMALL_KEYBOARD_RIGHT: &str = "smallKeyboardRight";
pub const SMALL_KEYBOARD_LEFT: &str = "smallKeyboardLeft";
pub const CAPS_LOCK: &str = "capsLock";
pub const TOUCH_EVENTS: &str = "touchEvents";
pub const KEYBOARD_LAYOUT: &str = "keyboardLayout1";
pub const URL_BUTTON: &str = "urlButton";
pub const HARDWARE_ACCELERATION: &str = "hardwareAcceleration";
pub const ZOOM_LEVEL: &str = "zoomLevel";
pub const AUTO_TRIGGER: &str = "autoTrigger";
pub const AUTO_TRIGGER_LINKS: &str = "autoTriggerLinks";
pub const AUTO_TRIGGER_AFTER: &str = "autoTriggerAfter";
pub const REPEAT_LETTERS: &str = "repeatLetters";
pub const INTELLIGENT_SCROLL: &str = "intelligentScroll";

pub const SMALL_KEYBOARD_COORDS: [&str; 5] = [
    SMALL_KEYBOARD,
    SMALL_KEYBOARD_TOP,
    SMALL_KEYBOARD_BOTTOM,
    SMALL_KEYBOARD_RIGHT,
    SMALL_KEYBOARD_LEFT,
];

pub const KEYBOARD_SETTINGS: [&str; 7] = [
    OPENED_FIRST_TIME,
    CAPS_LOCK,
    SMALL_KEYBOARD,
    TOUCH_EVENTS,
    KEYBOARD_LAYOUT,
    URL_BUTTON,
    KEYBOARD_ENABLED,
];

pub const INIT_KEYBOARD_SETTINGS: [&str; 7] = [
    HARDWARE_ACCELERATION,
    ZOOM_LEVEL,
    AUTO_TRIGGER,
    REPEAT_LETTERS,
    INTELLIGENT_SCROLL,
    AUTO_TRIGGER_LINKS,
    AUTO_TRIGGER_AFTER,
];

/// Asynchronous flat key-value store. Both calls resolve once the
/// underlying storage has accepted the operation.
#[async_trait(?Send)]
pub trait SettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<Settings>;

    async fn set(&self, items: Settings) -> Result<()>;

    async fn get_one(&self, key: &str) -> Result<Option<Value>> {
        let mut found = self.get(&[key]).await?;
        Ok(found.remove(key))
    }

    async fn set_one(&self, key: &str, value: Value) -> Result<()> {
        let mut items = Settings::new();
        items.insert(key.to_string(), value);
        self.set(items).await
    }
}

/// The `keyboardEnabled` tri-state.
///
/// Stored as the strings `'true'`, `'false'` and `'demand'`. Anything other
/// than `'false'` or `'demand'` (including a missing value) reads as `On`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardState {
    On,
    Demand,
    Off,
}

impl KeyboardState {
    pub fn from_setting(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("false") => KeyboardState::Off,
            Some("demand") => KeyboardState::Demand,
            _ => KeyboardState::On,
        }
    }

    pub fn as_setting(&self) -> &'static str {
        match self {
            KeyboardState::On => "true",
            KeyboardState::Demand => "demand",
            KeyboardState::Off => "false",
        }
    }

    /// `'false'` flips to `'true'`; every active state flips to `'false'`
    pub fn toggled(self) -> Self {
        match self {
            KeyboardState::Off => KeyboardState::On,
            KeyboardState::On | KeyboardState::Demand => KeyboardState::Off,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != KeyboardState::Off
    }
}

/// True only for the literal string `'false'`
pub fn is_false_flag(value: Option<&Value>) -> bool {
    matches!(value.and_then(Value::as_str), Some("false"))
}

/// In-memory store for native hosts and tests
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<Settings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Settings) -> Self {
        Self {
            items: RefCell::new(items),
        }
    }

    pub fn snapshot(&self) -> Settings {
        self.items.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SettingsStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<Settings> {
        let items = self.items.borrow();
        Ok(keys
            .iter()
            .filter_map(|key| items.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, items: Settings) -> Result<()> {
        self.items.borrow_mut().extend(items);
        Ok(())
    }
}
