// Command router: the single entry point for requests from the popup,
// content scripts and the options page.
//
// Every handler answers. Unknown methods get `{}`, a missing active tab or an
// unreachable page just means the tab-directed effect is skipped, and store
// failures are logged and treated as "nothing stored".

mod request;
mod response;

pub use request::Request;
pub use response::Response;

use std::rc::Rc;

use serde_json::Value;

use crate::context::CoreContext;
use crate::host::{Delivery, Host, TabCommand, TabId, TabMessage};
use crate::reflector;
use crate::settings::{
    KeyboardState, Settings, SettingsStore, INIT_KEYBOARD_SETTINGS, KEYBOARD_ENABLED,
    KEYBOARD_SETTINGS, SMALL_KEYBOARD_COORDS,
};

pub struct Router<S, H> {
    ctx: Rc<CoreContext<S, H>>,
}

impl<S, H> Clone for Router<S, H> {
    fn clone(&self) -> Self {
        Self {
            ctx: Rc::clone(&self.ctx),
        }
    }
}

impl<S, H> Router<S, H>
where
    S: SettingsStore,
    H: Host,
{
    pub fn new(ctx: Rc<CoreContext<S, H>>) -> Self {
        Self { ctx }
    }

    /// Raw message in, raw response out
    pub async fn handle(&self, raw: Value) -> Value {
        self.dispatch(Request::from_json(raw)).await.to_json()
    }

    pub async fn dispatch(&self, request: Request) -> Response {
        log::debug!("Request: {}", request.method());

        match request {
            Request::GetLocalStorage { key } => self.get_local_storage(key).await,
            Request::SetLocalStorage { key, value } => self.set_local_storage(key, value).await,
            Request::GetSmallKeyboardCoords => self.read_fields(&SMALL_KEYBOARD_COORDS).await,
            Request::LoadKeyboardSettings => self.read_fields(&KEYBOARD_SETTINGS).await,
            Request::InitLoadKeyboardSettings => self.read_fields(&INIT_KEYBOARD_SETTINGS).await,
            Request::OpenFromIframe(raw) | Request::ClickFromIframe(raw) => {
                self.send_to_active_tab(TabMessage::Forward(raw)).await;
                Response::Empty
            }
            Request::ToggleKeyboard => self.toggle_keyboard().await,
            Request::ToggleKeyboardOn => self.switch_keyboard(KeyboardState::On).await,
            Request::ToggleKeyboardDemand => self.switch_keyboard(KeyboardState::Demand).await,
            Request::ToggleKeyboardOff => self.switch_keyboard(KeyboardState::Off).await,
            Request::OpenUrlBar => {
                self.send_to_active_tab(TabMessage::Command(TabCommand::OpenUrlBar))
                    .await;
                Response::Ok
            }
            Request::CreateTab { url } => self.create_tab(url).await,
            Request::Unknown(method) => {
                log::debug!("Ignoring unknown method {:?}", method);
                Response::Empty
            }
        }
    }

    async fn get_local_storage(&self, key: Option<String>) -> Response {
        let Some(key) = key else {
            return Response::Data(None);
        };

        match self.ctx.store.get_one(&key).await {
            Ok(value) => Response::Data(value),
            Err(e) => {
                log::warn!("getLocalStorage({}) failed: {}", key, e);
                Response::Data(None)
            }
        }
    }

    async fn set_local_storage(&self, key: Option<String>, value: Option<Value>) -> Response {
        match (key, value) {
            (Some(key), Some(value)) => {
                if let Err(e) = self.ctx.store.set_one(&key, value).await {
                    log::warn!("setLocalStorage({}) failed: {}", key, e);
                }
            }
            (key, _) => log::debug!("setLocalStorage without key/value (key: {:?})", key),
        }
        Response::Ok
    }

    async fn read_fields(&self, keys: &[&str]) -> Response {
        match self.ctx.store.get(keys).await {
            Ok(found) => {
                let fields: Settings = keys
                    .iter()
                    .filter_map(|key| found.get(*key).map(|v| (key.to_string(), v.clone())))
                    .collect();
                Response::Fields(fields)
            }
            Err(e) => {
                log::warn!("Reading {:?} failed: {}", keys, e);
                Response::Fields(Settings::new())
            }
        }
    }

    async fn toggle_keyboard(&self) -> Response {
        let next = {
            let _guard = self.ctx.keyboard_lock.lock().await;

            let current = match self.ctx.store.get_one(KEYBOARD_ENABLED).await {
                Ok(value) => KeyboardState::from_setting(value.as_ref()),
                Err(e) => {
                    log::warn!("Could not read {}: {}", KEYBOARD_ENABLED, e);
                    KeyboardState::On
                }
            };
            let next = current.toggled();
            self.store_keyboard_state(next).await;
            next
        };

        self.show_keyboard_state(next).await;
        Response::Ok
    }

    async fn switch_keyboard(&self, next: KeyboardState) -> Response {
        {
            let _guard = self.ctx.keyboard_lock.lock().await;
            self.store_keyboard_state(next).await;
        }

        self.show_keyboard_state(next).await;
        Response::Ok
    }

    /// Caller holds `keyboard_lock`
    async fn store_keyboard_state(&self, next: KeyboardState) {
        if let Err(e) = self
            .ctx
            .store
            .set_one(KEYBOARD_ENABLED, Value::String(next.as_setting().to_string()))
            .await
        {
            log::warn!("Could not store {}={}: {}", KEYBOARD_ENABLED, next.as_setting(), e);
        }
    }

    /// Refresh the active tab's icon and tell its keyboard to open or close.
    /// Runs outside `keyboard_lock`.
    async fn show_keyboard_state(&self, next: KeyboardState) {
        let Some(tab) = self.ctx.host.active_tab().await else {
            log::debug!("No active tab, keyboard state stored only");
            return;
        };

        reflector::load_page_icon(&self.ctx.store, &self.ctx.host, &self.ctx.config.icons, tab)
            .await;

        let command = if next.is_active() {
            TabCommand::OpenKeyboard
        } else {
            TabCommand::CloseKeyboard
        };
        self.notify(tab, &TabMessage::Command(command)).await;
    }

    async fn create_tab(&self, url: Option<String>) -> Response {
        let url = url.unwrap_or_default();

        if url.contains(self.ctx.config.options.page.as_str()) {
            log::warn!("Refusing to open options page from createTab: {}", url);
            return Response::Blocked;
        }

        if !url.is_empty() {
            if let Err(e) = self.ctx.host.create_tab(&url).await {
                log::warn!("Could not open {}: {}", url, e);
            }
        }
        Response::Empty
    }

    async fn send_to_active_tab(&self, message: TabMessage) {
        match self.ctx.host.active_tab().await {
            Some(tab) => self.notify(tab, &message).await,
            None => log::debug!("No active tab for {:?}", message),
        }
    }

    async fn notify(&self, tab: TabId, message: &TabMessage) {
        if self.ctx.host.send_message(tab, message).await == Delivery::TargetUnavailable {
            log::debug!("Tab {} did not take {:?}", tab, message);
        }
    }
}
