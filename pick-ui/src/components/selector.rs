//! Dropdown selector with single and multiple selection
//!
//! The host owns the selected value and passes it in through
//! [`SelectorMode`]; the component only keeps its open/highlight state and
//! reports changes through the mode's `on_change`.
//!
//! ```ignore
//! Selector {
//!     options: options.clone(),
//!     mode: SelectorMode::Single {
//!         value: value(),
//!         on_change: EventHandler::new(move |next| value.set(next)),
//!     },
//! }
//! ```

use dioxus::prelude::*;
use pick_common::{dispatch, Comparison, DropdownState, OptionRef, Selection, SelectorEvent};
use tracing::debug;

use crate::components::icons::{ChevronDownIcon, XIcon};

/// Selection shape and change callback, fixed per selector.
///
/// Single mode pairs an optional value with a callback taking an optional
/// value; multiple mode pairs a list with a callback taking a list. A list
/// value with a single-mode callback cannot be expressed.
#[derive(Clone, PartialEq)]
pub enum SelectorMode {
    Single {
        value: Option<OptionRef>,
        on_change: EventHandler<Option<OptionRef>>,
    },
    Multiple {
        value: Vec<OptionRef>,
        on_change: EventHandler<Vec<OptionRef>>,
    },
}

impl SelectorMode {
    /// Run `event` against the current value and forward any change to the host.
    pub fn dispatch(
        &self,
        dropdown: &mut DropdownState,
        options: &[OptionRef],
        comparison: Comparison,
        event: SelectorEvent,
    ) {
        match self {
            SelectorMode::Single { value, on_change } => {
                if let Some(next) = dispatch(dropdown, value, options, comparison, event) {
                    debug!(
                        "Selector changed (single): {:?}",
                        next.as_ref().map(|o| o.label.as_str())
                    );
                    on_change.call(next);
                }
            }
            SelectorMode::Multiple { value, on_change } => {
                if let Some(next) = dispatch(dropdown, value, options, comparison, event) {
                    debug!("Selector changed (multiple): {} selected", next.count());
                    on_change.call(next);
                }
            }
        }
    }

    pub fn is_selected(&self, option: &OptionRef, comparison: Comparison) -> bool {
        self.value().is_selected(option, comparison)
    }

    /// Whether anything is selected (controls the clear button)
    pub fn has_selection(&self) -> bool {
        self.value().has_selection()
    }

    fn value(&self) -> ModeValue<'_> {
        match self {
            SelectorMode::Single { value, .. } => ModeValue::Single(value),
            SelectorMode::Multiple { value, .. } => ModeValue::Multiple(value),
        }
    }
}

/// Current value of a [`SelectorMode`] without its callback
#[derive(Clone, Copy)]
enum ModeValue<'a> {
    Single(&'a Option<OptionRef>),
    Multiple(&'a Vec<OptionRef>),
}

impl ModeValue<'_> {
    fn is_selected(self, option: &OptionRef, comparison: Comparison) -> bool {
        match self {
            ModeValue::Single(value) => Selection::contains(value, option, comparison),
            ModeValue::Multiple(value) => Selection::contains(value, option, comparison),
        }
    }

    fn has_selection(self) -> bool {
        match self {
            ModeValue::Single(value) => !Selection::is_empty(value),
            ModeValue::Multiple(value) => !Selection::is_empty(value),
        }
    }
}

/// Dropdown selector
#[component]
pub fn Selector(
    /// Candidate options, rendered in order
    options: Vec<OptionRef>,
    /// Current value and change callback
    mode: SelectorMode,
    /// How options are matched against the current value
    #[props(default)]
    comparison: Comparison,
    /// Extra class for the container
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut dropdown = use_signal(DropdownState::default);
    let state = dropdown();

    // Rebuilt every render so handlers always see the latest props
    let send = {
        let mode = mode.clone();
        let options = options.clone();
        use_callback(move |event: SelectorEvent| {
            let current = *dropdown.peek();
            let mut next = current;
            mode.dispatch(&mut next, &options, comparison, event);
            if next != current {
                dropdown.set(next);
            }
        })
    };

    let current_view = match &mode {
        SelectorMode::Single { value, .. } => {
            let label = value.as_ref().map(|o| o.label.clone()).unwrap_or_default();
            rsx! { "{label}" }
        }
        SelectorMode::Multiple { value, .. } => rsx! {
            for (index , option) in value.iter().cloned().enumerate() {
                Chip {
                    key: "{index}",
                    option,
                    on_remove: move |option: OptionRef| send.call(SelectorEvent::ChipRemoved(option)),
                }
            }
        },
    };

    let items: Vec<(usize, String, &'static str)> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            (
                index,
                option.label.clone(),
                option_class(
                    mode.is_selected(option, comparison),
                    state.is_highlighted(index),
                ),
            )
        })
        .collect();

    let container_class = match class {
        Some(extra) => format!("pick-selector {}", extra),
        None => "pick-selector".to_string(),
    };
    let list_class = if state.is_open {
        "pick-selector-options open"
    } else {
        "pick-selector-options"
    };

    rsx! {
        div {
            class: "{container_class}",
            tabindex: "0",
            onclick: move |_| send.call(SelectorEvent::ToggleClicked),
            onblur: move |_| send.call(SelectorEvent::FocusLost),

            span { class: "pick-selector-value", {current_view} }

            if mode.has_selection() {
                button {
                    class: "pick-selector-clear",
                    r#type: "button",
                    // Keep focus on the container so clearing does not blur it
                    onmousedown: move |e: MouseEvent| e.prevent_default(),
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        send.call(SelectorEvent::ClearClicked);
                    },
                    XIcon {}
                }
            }

            div { class: "pick-selector-divider" }
            span { class: "pick-selector-caret", ChevronDownIcon {} }

            ul { class: "{list_class}",
                for (index , label , item_class) in items {
                    li {
                        key: "{index}",
                        class: "{item_class}",
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            send.call(SelectorEvent::OptionClicked(index));
                        },
                        onmouseenter: move |_| send.call(SelectorEvent::OptionHovered(index)),
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Removable token for one selected option in multiple mode
#[component]
fn Chip(option: OptionRef, on_remove: EventHandler<OptionRef>) -> Element {
    let label = option.label.clone();

    rsx! {
        button {
            class: "pick-selector-chip",
            r#type: "button",
            onmousedown: move |e: MouseEvent| e.prevent_default(),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                on_remove.call(option.clone());
            },
            "{label} ×"
        }
    }
}

fn option_class(is_selected: bool, is_highlighted: bool) -> &'static str {
    match (is_selected, is_highlighted) {
        (true, true) => "pick-selector-option selected highlighted",
        (true, false) => "pick-selector-option selected",
        (false, true) => "pick-selector-option highlighted",
        (false, false) => "pick-selector-option",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_class_states_are_independent() {
        assert_eq!(option_class(false, false), "pick-selector-option");
        assert!(option_class(true, false).contains("selected"));
        assert!(option_class(false, true).contains("highlighted"));
        let both = option_class(true, true);
        assert!(both.contains("selected") && both.contains("highlighted"));
    }

    #[test]
    fn test_single_value_selection() {
        let options = OptionRef::list(&[("one", 1), ("two", 2)]);
        let lookalike = OptionRef::new("one", 1);

        let empty = None;
        assert!(!ModeValue::Single(&empty).has_selection());
        assert!(!ModeValue::Single(&empty).is_selected(&options[0], Comparison::Identity));

        let value = Some(lookalike);
        let current = ModeValue::Single(&value);
        assert!(current.has_selection());
        assert!(!current.is_selected(&options[0], Comparison::Identity));
        assert!(current.is_selected(&options[0], Comparison::Structural));
        assert!(!current.is_selected(&options[1], Comparison::Structural));
    }

    #[test]
    fn test_multiple_value_selection() {
        let options = OptionRef::list(&[("one", 1), ("two", 2), ("three", 3)]);

        let empty = Vec::new();
        assert!(!ModeValue::Multiple(&empty).has_selection());

        let value = vec![options[2].clone(), options[0].clone()];
        let current = ModeValue::Multiple(&value);
        assert!(current.has_selection());
        assert!(current.is_selected(&options[0], Comparison::Identity));
        assert!(current.is_selected(&options[2], Comparison::Identity));
        assert!(!current.is_selected(&options[1], Comparison::Identity));
        assert!(!current.is_selected(&OptionRef::new("one", 1), Comparison::Identity));
    }
}
