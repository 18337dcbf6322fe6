//! Background coordination and popup for the Virtual Keyboard browser extension.
//!
//! The background worker (`src/background.rs`) owns a [`router::Router`] and a
//! [`lifecycle::Lifecycle`] sharing one [`context::CoreContext`]; the popup is a
//! small Dioxus app driving [`popup::PopupController`]. Everything that touches
//! the browser sits behind the traits in [`settings`] and [`host`], with the
//! Chrome implementations in `services`.

pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod popup;
pub mod reflector;
pub mod router;
pub mod services;
pub mod settings;

#[cfg(feature = "dioxus")]
mod components;
#[cfg(feature = "dioxus")]
pub mod icons;

#[cfg(test)]
mod testing;

pub use config::ExtensionConfig;
pub use context::CoreContext;
pub use error::{ExtensionError, Result};
pub use lifecycle::Lifecycle;
pub use router::{Request, Response, Router};

#[cfg(feature = "dioxus")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Virtual Keyboard popup starting...");
    dioxus::launch(components::PopupView);
}
