//! Demo page: one single-mode and one multiple-mode selector sharing options

use crate::demo_data;
use dioxus::prelude::*;
use pick_ui::{OptionRef, Selector, SelectorMode};

#[component]
pub fn Demo() -> Element {
    // Built once so option identity is stable across renders
    let options = use_hook(demo_data::numbers);
    let mut value = use_signal(|| options.first().cloned());
    let mut values = use_signal(Vec::<OptionRef>::new);

    let single = SelectorMode::Single {
        value: value(),
        on_change: EventHandler::new(move |next: Option<OptionRef>| value.set(next)),
    };
    let multiple = SelectorMode::Multiple {
        value: values(),
        on_change: EventHandler::new(move |next: Vec<OptionRef>| values.set(next)),
    };

    rsx! {
        div { class: "mock-page mock-demo",
            Selector { options: options.clone(), mode: single }
            div { class: "mock-spacer" }
            Selector { options, mode: multiple }
        }
    }
}
