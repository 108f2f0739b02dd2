//! Mock index and page wrappers with URL state persistence

use crate::mocks::SelectorMock;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "mock-page mock-index",
            h1 { "pick mocks" }

            h2 { "Demo" }
            LinkCard {
                to: Route::Demo {},
                title: "Two selectors",
                description: "A single and a multiple selector over the same four options",
            }

            h2 { "Components" }
            LinkCard {
                to: Route::MockSelector {
                    state: None,
                },
                title: "Selector",
                description: "Mode, comparison and option list controls with presets",
            }
        }
    }
}

#[component]
pub fn MockSelector(state: Option<String>) -> Element {
    rsx! {
        SelectorMock { initial_state: state }
    }
}
