//! Auto-generated control panel UI

use super::registry::ControlRegistry;
use crate::Route;
use dioxus::prelude::*;

/// Main mock panel component that renders presets, controls, and the mock
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "mock-page",
            div { class: "mock-controls",
                div { class: "mock-header",
                    Link { to: Route::MockIndex {}, class: "mock-back", "← All mocks" }
                    h1 { "{title}" }
                }

                if !registry.presets.is_empty() {
                    PresetBar { registry: registry.clone() }
                }

                ControlsRow { registry: registry.clone() }
            }

            div { class: "mock-content", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "mock-row",
            span { class: "mock-row-label", "Presets:" }
            for preset in &registry.presets {
                button {
                    class: if registry.is_active(preset) { "mock-chip active" } else { "mock-chip" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Enum controls render as button groups, bool controls as checkboxes
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let enum_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_some())
        .cloned()
        .collect();
    let bool_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_none())
        .cloned()
        .collect();

    rsx! {
        for control in enum_controls {
            div { class: "mock-row",
                span { class: "mock-row-label", title: control.doc.unwrap_or(""), "{control.label}:" }
                for (value , label) in control.enum_options.clone().unwrap_or_default() {
                    EnumButton {
                        registry: registry.clone(),
                        control_key: control.key,
                        value,
                        label,
                    }
                }
            }
        }

        if !bool_controls.is_empty() {
            div { class: "mock-row",
                for control in bool_controls {
                    BoolCheckbox {
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "mock-chip active" } else { "mock-chip" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            "{label}"
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label { class: "mock-checkbox", title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
        }
    }
}
