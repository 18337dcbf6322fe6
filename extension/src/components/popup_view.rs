use dioxus::prelude::*;

use crate::config::ExtensionConfig;
use crate::icons;
use crate::popup::{PopupControl, PopupController};
use crate::services::ChromePopupHost;

#[component]
pub fn PopupView() -> Element {
    rsx! {
        div { class: "w-64 p-4 bg-white",
            div { class: "flex items-center mb-4",
                icons::Keyboard { class: Some("w-6 h-6 text-blue-600 mr-2".to_string()) }
                h1 { class: "text-lg font-bold text-gray-900", "Virtual Keyboard" }
            }

            div { class: "space-y-2",
                for control in PopupControl::ALL {
                    ControlButton { key: "{control.element_id()}", control: control }
                }
            }
        }
    }
}

#[component]
fn ControlButton(control: PopupControl) -> Element {
    let class = match control {
        PopupControl::On => "w-full flex items-center bg-blue-600 text-white py-2 px-3 rounded-lg hover:bg-blue-700 transition",
        PopupControl::Demand => "w-full flex items-center bg-blue-100 text-blue-800 py-2 px-3 rounded-lg hover:bg-blue-200 transition",
        PopupControl::Off => "w-full flex items-center bg-gray-200 text-gray-700 py-2 px-3 rounded-lg hover:bg-gray-300 transition",
        PopupControl::UrlBar | PopupControl::Options => "w-full flex items-center text-gray-600 py-2 px-3 rounded-lg hover:bg-gray-100 transition",
    };
    let icon_class = Some("w-4 h-4 mr-2".to_string());

    rsx! {
        button {
            id: control.element_id(),
            class: "{class}",
            onclick: move |_| {
                spawn(async move {
                    let options_page = ExtensionConfig::bundled().options.page;
                    PopupController::new(ChromePopupHost, options_page)
                        .click(control)
                        .await;
                });
            },
            match control {
                PopupControl::On => rsx! { icons::Keyboard { class: icon_class } },
                PopupControl::Demand => rsx! { icons::Hand { class: icon_class } },
                PopupControl::Off => rsx! { icons::Power { class: icon_class } },
                PopupControl::UrlBar => rsx! { icons::Link { class: icon_class } },
                PopupControl::Options => rsx! { icons::Settings { class: icon_class } },
            }
            span { "{control.label()}" }
        }
    }
}
