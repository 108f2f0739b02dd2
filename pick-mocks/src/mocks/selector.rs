//! Selector mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;
use pick_ui::{Comparison, OptionRef, Selector, SelectorMode};
use tracing::info;

#[component]
pub fn SelectorMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "mode",
            "Mode",
            "single",
            vec![("single", "Single"), ("multiple", "Multiple")],
        )
        .enum_control(
            "comparison",
            "Comparison",
            "identity",
            vec![("identity", "Identity"), ("structural", "Structural")],
        )
        .doc("How options are matched against the current value")
        .enum_control(
            "options",
            "Options",
            "numbers",
            vec![
                ("numbers", "Numbers"),
                ("lookalikes", "Lookalikes"),
                ("long", "Long list"),
            ],
        )
        .bool_control("seeded", "Start with a selection", false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Multiple").set_string("mode", "multiple"),
            Preset::new("Seeded")
                .set_string("mode", "multiple")
                .set_bool("seeded", true),
            Preset::new("Lookalikes")
                .set_string("mode", "multiple")
                .set_string("options", "lookalikes"),
            Preset::new("Lookalikes (structural)")
                .set_string("mode", "multiple")
                .set_string("options", "lookalikes")
                .set_string("comparison", "structural"),
            Preset::new("Long list").set_string("options", "long"),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockSelector { state });

    let multiple = registry.get_string("mode") == "multiple";
    let comparison = match registry.get_string("comparison").as_str() {
        "structural" => Comparison::Structural,
        _ => Comparison::Identity,
    };
    let option_set = registry.get_string("options");
    let seeded = registry.get_bool("seeded");

    rsx! {
        MockPanel { title: "Selector".to_string(), registry,
            // Remount when the host state shape changes so values start fresh
            SelectorPlayground {
                key: "{option_set}-{multiple}-{seeded}",
                option_set: option_set.clone(),
                multiple,
                seeded,
                comparison,
            }
        }
    }
}

/// Host for one selector: owns the options and the selected value(s)
#[component]
fn SelectorPlayground(
    option_set: String,
    multiple: bool,
    seeded: bool,
    comparison: Comparison,
) -> Element {
    let options = use_hook(|| demo_data::option_set(&option_set));
    let first = options.first().cloned().filter(|_| seeded);

    let mut single_value = use_signal(|| first.clone());
    let mut multiple_value = use_signal(|| first.into_iter().collect::<Vec<_>>());

    let mode = if multiple {
        SelectorMode::Multiple {
            value: multiple_value(),
            on_change: EventHandler::new(move |next: Vec<OptionRef>| {
                info!("Host received {} selected option(s)", next.len());
                multiple_value.set(next);
            }),
        }
    } else {
        SelectorMode::Single {
            value: single_value(),
            on_change: EventHandler::new(move |next: Option<OptionRef>| {
                info!(
                    "Host received {:?}",
                    next.as_ref().map(|o| o.label.as_str())
                );
                single_value.set(next);
            }),
        }
    };

    let current = if multiple {
        demo_data::describe(&multiple_value())
    } else {
        demo_data::describe(single_value().as_slice())
    };

    rsx! {
        div { class: "mock-stage",
            Selector { options, mode, comparison }
            p { class: "mock-note", "Current value: {current}" }
        }
    }
}
