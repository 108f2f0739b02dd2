//! pick mocks - Component gallery for the selector
//!
//! Hosts the selector the way an application would: the demo page owns
//! plain signals, the mock page drives the selector from URL-persisted
//! controls and presets.

pub mod demo_data;
pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use pages::{Demo, MockIndex, MockSelector};
use pick_ui::SelectorStyles;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/demo")]
    Demo {},
    #[route("/selector?:state")]
    MockSelector { state: Option<String> },
}

const MOCKS_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #222; }
* { box-sizing: border-box; }
.mock-page { padding: 1.5em; }
.mock-index h2 { font-size: 1em; color: #666; margin: 1.5em 0 0.5em; }
.mock-card { display: block; padding: 0.75em 1em; margin-bottom: 0.5em; border: 1px solid #ddd; border-radius: 0.5em; color: inherit; text-decoration: none; }
.mock-card:hover { background: #f5f5f5; }
.mock-card-title { font-weight: 600; }
.mock-card-description { font-size: 0.875em; color: #666; }
.mock-controls { border-bottom: 1px solid #ddd; padding-bottom: 1em; margin-bottom: 1.5em; }
.mock-header { display: flex; align-items: baseline; gap: 1em; }
.mock-header h1 { font-size: 1.25em; margin: 0 0 0.5em; }
.mock-back { font-size: 0.875em; color: #666; }
.mock-row { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5em; margin-bottom: 0.5em; }
.mock-row-label { font-size: 0.75em; color: #666; min-width: 6em; }
.mock-chip { padding: 0.25em 0.6em; font-size: 0.8em; border: 1px solid #ccc; border-radius: 0.25em; background: #f0f0f0; cursor: pointer; }
.mock-chip.active { background: hsl(200, 100%, 45%); border-color: hsl(200, 100%, 45%); color: white; }
.mock-checkbox { display: flex; align-items: center; gap: 0.4em; font-size: 0.875em; color: #444; }
.mock-stage { min-height: 20em; }
.mock-note { font-size: 0.875em; color: #666; margin-top: 1em; }
.mock-spacer { height: 1em; }
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{MOCKS_CSS}" }
        SelectorStyles {}
        Router::<Route> {}
    }
}
