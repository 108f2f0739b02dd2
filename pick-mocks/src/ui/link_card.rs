//! Link card component

use crate::Route;
use dioxus::prelude::*;

/// A card-style navigation link with title and description
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to, class: "mock-card",
            div { class: "mock-card-title", "{title}" }
            div { class: "mock-card-description", "{description}" }
        }
    }
}
