// Action button state: which icon a tab shows, and whether the button is usable.
// Failures here (tab closed mid-update etc.) are logged and dropped.

use crate::config::IconConfig;
use crate::host::{ActionHost, TabId};
use crate::settings::{KeyboardState, SettingsStore, KEYBOARD_ENABLED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconVariant {
    On,
    Demand,
    Off,
}

impl From<KeyboardState> for IconVariant {
    fn from(state: KeyboardState) -> Self {
        match state {
            KeyboardState::On => IconVariant::On,
            KeyboardState::Demand => IconVariant::Demand,
            KeyboardState::Off => IconVariant::Off,
        }
    }
}

/// Read `keyboardEnabled` and apply the matching icon to `tab`.
/// An unreadable store counts as "never set", i.e. the on icon.
pub async fn load_page_icon<S, A>(store: &S, action: &A, icons: &IconConfig, tab: TabId)
where
    S: SettingsStore + ?Sized,
    A: ActionHost + ?Sized,
{
    let value = match store.get_one(KEYBOARD_ENABLED).await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read {}: {}", KEYBOARD_ENABLED, e);
            None
        }
    };

    let variant = IconVariant::from(KeyboardState::from_setting(value.as_ref()));
    let path = icons.path(variant);
    log::debug!("Tab {}: icon {:?} ({})", tab, variant, path);

    if let Err(e) = action.set_icon(tab, path).await {
        log::warn!("Tab {}: setIcon failed: {}", tab, e);
    }
}

pub async fn set_action_enabled<A>(action: &A, tab: TabId, enabled: bool)
where
    A: ActionHost + ?Sized,
{
    if let Err(e) = action.set_enabled(tab, enabled).await {
        log::warn!(
            "Tab {}: could not {} action: {}",
            tab,
            if enabled { "enable" } else { "disable" },
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;
    use crate::testing::{store_with, FakeHost};
    use futures::executor::block_on;
    use serde_json::json;

    fn icon_for(value: Option<serde_json::Value>) -> String {
        let store = match value {
            Some(v) => store_with(&[(KEYBOARD_ENABLED, v)]),
            None => MemoryStore::new(),
        };
        let host = FakeHost::new();
        block_on(load_page_icon(&store, &host, &IconConfig::default(), 7));
        let icons = host.icons();
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].0, 7);
        icons[0].1.clone()
    }

    #[test]
    fn test_icon_selection() {
        assert_eq!(icon_for(Some(json!("false"))), "buttons/keyboard_3.png");
        assert_eq!(icon_for(Some(json!("demand"))), "buttons/keyboard_2.png");
        assert_eq!(icon_for(Some(json!("true"))), "buttons/keyboard_1.png");
        assert_eq!(icon_for(None), "buttons/keyboard_1.png");
        assert_eq!(icon_for(Some(json!(42))), "buttons/keyboard_1.png");
    }

    #[test]
    fn test_icon_failure_is_swallowed() {
        let store = MemoryStore::new();
        let host = FakeHost::new().failing_actions();
        block_on(load_page_icon(&store, &host, &IconConfig::default(), 3));
        block_on(set_action_enabled(&host, 3, false));
        assert!(host.icons().is_empty());
        assert!(host.enabled_calls().is_empty());
    }

    #[test]
    fn test_unreadable_store_shows_on_icon() {
        let store = crate::testing::BrokenStore;
        let host = FakeHost::new();
        block_on(load_page_icon(&store, &host, &IconConfig::default(), 1));
        assert_eq!(host.icons(), vec![(1, "buttons/keyboard_1.png".to_string())]);
    }

    #[test]
    fn test_set_action_enabled_records_state() {
        let host = FakeHost::new();
        block_on(set_action_enabled(&host, 4, true));
        block_on(set_action_enabled(&host, 5, false));
        assert_eq!(host.enabled_calls(), vec![(4, true), (5, false)]);
    }
}
