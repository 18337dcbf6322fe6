// Popup controller: turns clicks on the popup's controls into router requests.
// Holds no state; every click stands alone.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::Result;
use crate::router::Request;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupControl {
    On,
    Off,
    Demand,
    UrlBar,
    Options,
}

impl PopupControl {
    pub const ALL: [PopupControl; 5] = [
        PopupControl::On,
        PopupControl::Demand,
        PopupControl::Off,
        PopupControl::UrlBar,
        PopupControl::Options,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            PopupControl::On => "btn_on",
            PopupControl::Off => "btn_off",
            PopupControl::Demand => "btn_demand",
            PopupControl::UrlBar => "btn_url",
            PopupControl::Options => "btn_options",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopupControl::On => "Always on",
            PopupControl::Demand => "On demand",
            PopupControl::Off => "Off",
            PopupControl::UrlBar => "Open URL bar",
            PopupControl::Options => "Settings",
        }
    }

    /// Router request for this control; `None` for the options control,
    /// which never goes through the router
    pub fn request(&self) -> Option<Request> {
        match self {
            PopupControl::On => Some(Request::ToggleKeyboardOn),
            PopupControl::Off => Some(Request::ToggleKeyboardOff),
            PopupControl::Demand => Some(Request::ToggleKeyboardDemand),
            PopupControl::UrlBar => Some(Request::OpenUrlBar),
            PopupControl::Options => None,
        }
    }
}

/// Outcome of asking the platform for its own settings page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsPage {
    Opened,
    /// This browser has no `openOptionsPage`
    Unsupported,
}

/// What the popup needs from the browser
#[async_trait(?Send)]
pub trait PopupHost {
    /// Fire-and-forget message to the background router
    async fn send_request(&self, request: Value);

    /// Platform's own way of showing the settings page
    async fn open_options_page(&self) -> Result<OptionsPage>;

    /// Open an extension page like any other page
    async fn open_page(&self, path: &str) -> Result<()>;
}

pub struct PopupController<P> {
    host: P,
    options_page: String,
}

impl<P: PopupHost> PopupController<P> {
    pub fn new(host: P, options_page: impl Into<String>) -> Self {
        Self {
            host,
            options_page: options_page.into(),
        }
    }

    pub async fn click(&self, control: PopupControl) {
        log::debug!("Popup click: {:?}", control);

        match control.request() {
            Some(request) => {
                self.host
                    .send_request(json!({ "method": request.method() }))
                    .await
            }
            None => self.open_options().await,
        }
    }

    async fn open_options(&self) {
        match self.host.open_options_page().await {
            Ok(OptionsPage::Opened) => {}
            Ok(OptionsPage::Unsupported) => {
                log::debug!("openOptionsPage unavailable, opening {}", self.options_page);
                if let Err(e) = self.host.open_page(&self.options_page).await {
                    log::warn!("Could not open {}: {}", self.options_page, e);
                }
            }
            Err(e) => log::warn!("openOptionsPage failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtensionError;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPopupHost {
        native_options: bool,
        rejecting_options: bool,
        sent: RefCell<Vec<Value>>,
        opened: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl PopupHost for RecordingPopupHost {
        async fn send_request(&self, request: Value) {
            self.sent.borrow_mut().push(request);
        }

        async fn open_options_page(&self) -> Result<OptionsPage> {
            if self.rejecting_options {
                return Err(ExtensionError::Js("Could not create an options page.".to_string()));
            }
            if self.native_options {
                self.opened.borrow_mut().push("<native>".to_string());
                Ok(OptionsPage::Opened)
            } else {
                Ok(OptionsPage::Unsupported)
            }
        }

        async fn open_page(&self, path: &str) -> Result<()> {
            self.opened.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_controls_send_router_requests() {
        let controller = PopupController::new(RecordingPopupHost::default(), "options.html");
        for control in [
            PopupControl::On,
            PopupControl::Demand,
            PopupControl::Off,
            PopupControl::UrlBar,
        ] {
            block_on(controller.click(control));
        }

        assert_eq!(
            *controller.host.sent.borrow(),
            vec![
                json!({ "method": "toogleKeyboardOn" }),
                json!({ "method": "toogleKeyboardDemand" }),
                json!({ "method": "toogleKeyboardOff" }),
                json!({ "method": "openUrlBar" }),
            ]
        );
        assert!(controller.host.opened.borrow().is_empty());
    }

    #[test]
    fn test_options_prefers_native_page() {
        let host = RecordingPopupHost {
            native_options: true,
            ..Default::default()
        };
        let controller = PopupController::new(host, "options.html");
        block_on(controller.click(PopupControl::Options));

        assert_eq!(*controller.host.opened.borrow(), vec!["<native>".to_string()]);
        assert!(controller.host.sent.borrow().is_empty());
    }

    #[test]
    fn test_options_falls_back_to_plain_page() {
        let controller = PopupController::new(RecordingPopupHost::default(), "options.html");
        block_on(controller.click(PopupControl::Options));
        assert_eq!(*controller.host.opened.borrow(), vec!["options.html".to_string()]);
    }

    #[test]
    fn test_rejected_options_page_opens_nothing_else() {
        let host = RecordingPopupHost {
            native_options: true,
            rejecting_options: true,
            ..Default::default()
        };
        let controller = PopupController::new(host, "options.html");
        block_on(controller.click(PopupControl::Options));

        assert!(controller.host.opened.borrow().is_empty());
        assert!(controller.host.sent.borrow().is_empty());
    }

    #[test]
    fn test_each_control_has_one_id() {
        let ids: Vec<_> = PopupControl::ALL.iter().map(PopupControl::element_id).collect();
        assert_eq!(ids, vec!["btn_on", "btn_demand", "btn_off", "btn_url", "btn_options"]);
    }
}
