// Install and tab-update listeners.
// Both run independently of any request the router is handling.

use std::rc::Rc;

use serde_json::Value;

use crate::context::CoreContext;
use crate::host::{Host, TabId};
use crate::reflector;
use crate::settings::{
    is_false_flag, KeyboardState, SettingsStore, KEYBOARD_ENABLED, OPENED_FIRST_TIME,
    TOOGLE_KEYBOARD,
};

pub struct Lifecycle<S, H> {
    ctx: Rc<CoreContext<S, H>>,
}

impl<S, H> Lifecycle<S, H>
where
    S: SettingsStore,
    H: Host,
{
    pub fn new(ctx: Rc<CoreContext<S, H>>) -> Self {
        Self { ctx }
    }

    /// Seed `openedFirstTime` unless some earlier install already did
    pub async fn on_installed(&self) {
        let existing = match self.ctx.store.get_one(OPENED_FIRST_TIME).await {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Install: could not read {}: {}", OPENED_FIRST_TIME, e);
                return;
            }
        };

        if existing.map_or(true, |v| v.is_null()) {
            log::info!("First install, seeding {}", OPENED_FIRST_TIME);
            if let Err(e) = self.ctx.store.set_one(OPENED_FIRST_TIME, Value::Bool(true)).await {
                log::warn!("Install: could not seed {}: {}", OPENED_FIRST_TIME, e);
            }
        }
    }

    /// Navigation or reload of `tab`: re-apply the action button state.
    ///
    /// Reads the legacy `toogleKeyboard` flag, not `keyboardEnabled`. Only the
    /// literal `'false'` disables the button (and resets `keyboardEnabled`).
    pub async fn on_tab_updated(&self, tab: TabId) {
        let flag = match self.ctx.store.get_one(TOOGLE_KEYBOARD).await {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Tab {}: could not read {}: {}", tab, TOOGLE_KEYBOARD, e);
                None
            }
        };

        if !is_false_flag(flag.as_ref()) {
            reflector::set_action_enabled(&self.ctx.host, tab, true).await;
            reflector::load_page_icon(&self.ctx.store, &self.ctx.host, &self.ctx.config.icons, tab)
                .await;
            return;
        }

        {
            let _guard = self.ctx.keyboard_lock.lock().await;
            let on = KeyboardState::On.as_setting();
            if let Err(e) = self
                .ctx
                .store
                .set_one(KEYBOARD_ENABLED, Value::String(on.to_string()))
                .await
            {
                log::warn!("Tab {}: could not reset {}: {}", tab, KEYBOARD_ENABLED, e);
            }
        }
        reflector::set_action_enabled(&self.ctx.host, tab, false).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtensionConfig;
    use crate::router::{Request, Response, Router};
    use crate::settings::MemoryStore;
    use crate::testing::{store_with, BrokenStore, FakeHost};
    use futures::executor::block_on;
    use futures::FutureExt;
    use serde_json::json;

    fn lifecycle_with(store: MemoryStore) -> Lifecycle<MemoryStore, FakeHost> {
        Lifecycle::new(Rc::new(CoreContext::new(
            store,
            FakeHost::new(),
            ExtensionConfig::default(),
        )))
    }

    #[test]
    fn test_first_install_seeds_flag() {
        let lifecycle = lifecycle_with(MemoryStore::new());
        block_on(lifecycle.on_installed());
        assert_eq!(
            lifecycle.ctx.store.snapshot().get(OPENED_FIRST_TIME),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_reinstall_leaves_flag_alone() {
        let lifecycle = lifecycle_with(store_with(&[(OPENED_FIRST_TIME, json!("kept"))]));
        block_on(lifecycle.on_installed());
        block_on(lifecycle.on_installed());
        assert_eq!(
            lifecycle.ctx.store.snapshot().get(OPENED_FIRST_TIME),
            Some(&json!("kept"))
        );
    }

    #[test]
    fn test_tab_update_with_flag_false_disables_action() {
        let lifecycle = lifecycle_with(store_with(&[
            (TOOGLE_KEYBOARD, json!("false")),
            (KEYBOARD_ENABLED, json!("false")),
        ]));
        block_on(lifecycle.on_tab_updated(21));

        assert_eq!(lifecycle.ctx.host.enabled_calls(), vec![(21, false)]);
        assert!(lifecycle.ctx.host.icons().is_empty());
        assert_eq!(
            lifecycle.ctx.store.snapshot().get(KEYBOARD_ENABLED),
            Some(&json!("true"))
        );
    }

    #[test]
    fn test_tab_update_otherwise_enables_and_refreshes_icon() {
        for flag in [None, Some(json!("true")), Some(json!(false))] {
            let mut items = vec![(KEYBOARD_ENABLED, json!("demand"))];
            if let Some(flag) = flag.clone() {
                items.push((TOOGLE_KEYBOARD, flag));
            }
            let lifecycle = lifecycle_with(store_with(&items));
            block_on(lifecycle.on_tab_updated(8));

            assert_eq!(lifecycle.ctx.host.enabled_calls(), vec![(8, true)], "{:?}", flag);
            assert_eq!(
                lifecycle.ctx.host.icons(),
                vec![(8, "buttons/keyboard_2.png".to_string())],
                "{:?}",
                flag
            );
            assert_eq!(
                lifecycle.ctx.store.snapshot().get(KEYBOARD_ENABLED),
                Some(&json!("demand"))
            );
        }
    }

    #[test]
    fn test_tab_update_ignores_keyboard_enabled_for_availability() {
        // keyboardEnabled='false' does not disable the button; only toogleKeyboard does
        let lifecycle = lifecycle_with(store_with(&[(KEYBOARD_ENABLED, json!("false"))]));
        block_on(lifecycle.on_tab_updated(2));
        assert_eq!(lifecycle.ctx.host.enabled_calls(), vec![(2, true)]);
        assert_eq!(
            lifecycle.ctx.host.icons(),
            vec![(2, "buttons/keyboard_3.png".to_string())]
        );
    }

    #[test]
    fn test_broken_store_does_not_panic() {
        let lifecycle = Lifecycle::new(Rc::new(CoreContext::new(
            BrokenStore,
            FakeHost::new(),
            ExtensionConfig::default(),
        )));
        block_on(lifecycle.on_installed());
        block_on(lifecycle.on_tab_updated(1));
        assert_eq!(lifecycle.ctx.host.enabled_calls(), vec![(1, true)]);
    }

    #[test]
    fn test_tab_update_runs_while_toggle_waits_on_page() {
        let ctx = Rc::new(CoreContext::new(
            store_with(&[(TOOGLE_KEYBOARD, json!("false"))]),
            FakeHost::with_active_tab(7).stall_first_message(),
            ExtensionConfig::default(),
        ));
        let router = Router::new(Rc::clone(&ctx));
        let lifecycle = Lifecycle::new(ctx);

        let mut stalled = Box::pin(router.dispatch(Request::ToggleKeyboardOff));
        assert!((&mut stalled).now_or_never().is_none());

        assert_eq!(lifecycle.on_tab_updated(7).now_or_never(), Some(()));
        assert_eq!(
            lifecycle.ctx.store.snapshot().get(KEYBOARD_ENABLED),
            Some(&json!("true"))
        );
        assert_eq!(lifecycle.ctx.host.enabled_calls(), vec![(7, false)]);

        // the router still answers afterwards
        assert_eq!(
            router.dispatch(Request::ToggleKeyboardDemand).now_or_never(),
            Some(Response::Ok)
        );
    }
}
