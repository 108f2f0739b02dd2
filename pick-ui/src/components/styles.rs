//! Structural styling for the selector
//!
//! Colors and spacing are cosmetic. What matters is the focusable
//! container, the absolutely positioned scrollable overlay that is only
//! shown while open, and the independent selected/highlighted item states.

use dioxus::prelude::*;

pub const SELECTOR_CSS: &str = r#"
.pick-selector {
    position: relative;
    width: 20em;
    min-height: 1.5em;
    border: 0.05em solid #777;
    display: flex;
    align-items: center;
    gap: 0.5em;
    padding: 0.5em;
    border-radius: 0.25em;
    outline: none;
    cursor: pointer;
}
.pick-selector:focus {
    border-color: hsl(200, 100%, 50%);
}
.pick-selector-value {
    flex-grow: 1;
    display: flex;
    flex-wrap: wrap;
    gap: 0.25em;
}
.pick-selector-chip {
    display: flex;
    align-items: center;
    border: 0.05em solid #777;
    border-radius: 0.25em;
    padding: 0.15em 0.25em;
    gap: 0.25em;
    cursor: pointer;
    background: none;
    outline: none;
}
.pick-selector-chip:hover,
.pick-selector-chip:focus {
    background-color: hsl(0, 100%, 90%);
    border-color: hsl(0, 100%, 50%);
}
.pick-selector-clear {
    background: none;
    color: #777;
    border: none;
    outline: none;
    cursor: pointer;
    padding: 0;
    display: flex;
}
.pick-selector-clear:hover,
.pick-selector-clear:focus {
    color: #333;
}
.pick-selector-divider {
    background-color: #777;
    align-self: stretch;
    width: 0.05em;
}
.pick-selector-caret {
    color: #777;
    display: flex;
}
.pick-icon {
    width: 1em;
    height: 1em;
}
.pick-selector-options {
    position: absolute;
    margin: 0;
    padding: 0;
    list-style: none;
    display: none;
    max-height: 15em;
    overflow-y: auto;
    border: 0.05em solid #777;
    border-radius: 0.25em;
    width: 100%;
    left: 0;
    top: calc(100% + 0.25em);
    background-color: white;
    z-index: 100;
}
.pick-selector-options.open {
    display: block;
}
.pick-selector-option {
    padding: 0.25em 0.5em;
    cursor: pointer;
}
.pick-selector-option.selected {
    background-color: hsl(200, 100%, 70%);
}
.pick-selector-option.highlighted {
    background-color: hsl(200, 100%, 50%);
    color: white;
}
"#;

/// Injects [`SELECTOR_CSS`]. Render once near the app root.
#[component]
pub fn SelectorStyles() -> Element {
    rsx! {
        style { "{SELECTOR_CSS}" }
    }
}
