//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;
use tracing::warn;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    /// (value, label) pairs for enum controls
    pub enum_options: Option<Vec<(&'static str, &'static str)>>,
}

impl ControlDef {
    pub fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
        }
    }

    /// Parse a raw URL value for this control, falling back to the default
    fn parse(&self, raw: Option<&str>) -> ControlValue {
        match (&self.default, raw) {
            (ControlValue::Bool(_), Some(raw)) => ControlValue::Bool(raw == "1" || raw == "true"),
            (ControlValue::String(default), Some(raw)) => match &self.enum_options {
                Some(options) if !options.iter().any(|(v, _)| *v == raw) => {
                    warn!("Unknown value '{}' for control '{}'", raw, self.key);
                    ControlValue::String(default.clone())
                }
                _ => ControlValue::String(raw.to_string()),
            },
            (default, None) => default.clone(),
        }
    }
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Starting value of every control, in declaration order. Unreadable
    /// state falls back to defaults.
    pub fn initial_values(&self, initial_state: Option<&str>) -> Vec<ControlValue> {
        let state_pairs = match initial_state.map(parse_state).transpose() {
            Ok(pairs) => pairs.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring unreadable mock state: {}", e);
                Vec::new()
            }
        };

        self.controls
            .iter()
            .map(|def| {
                let raw = state_pairs
                    .iter()
                    .find(|(k, _)| k == def.key)
                    .map(|(_, v)| v.as_str());
                def.parse(raw)
            })
            .collect()
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let initial = self.initial_values(initial_state.as_deref());

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for (def, value) in self.controls.iter().zip(initial) {
            let signal = use_signal(|| value);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl PartialEq for ControlRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.controls == other.controls
            && self.values == other.values
            && self.presets == other.presets
    }
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .map(|s| match &*s.read() {
                ControlValue::String(s) => s.clone(),
                _ => String::new(),
            })
            .unwrap_or_default()
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Reset every control to its default, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        for (key, value) in preset.resolve(&self.controls) {
            if let Some(mut signal) = self.values.get(key).copied() {
                signal.set(value);
            }
        }
    }

    /// Whether the current values are exactly what `preset` resolves to
    pub fn is_active(&self, preset: &Preset) -> bool {
        preset.resolve(&self.controls).iter().all(|(key, expected)| {
            self.values
                .get(key)
                .is_some_and(|signal| *signal.read() == *expected)
        })
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                match (&*signal.read(), &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (ControlValue::String(v), ControlValue::String(default)) => {
                        builder.set_string(def.key, v, default);
                    }
                    _ => {}
                }
            }
        }

        match builder.build_option() {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to encode mock state: {}", e);
                None
            }
        }
    }

    /// Keep the URL in step with the controls. `to_route` wraps the encoded
    /// state in the page's route.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::url_state::build_state;

    fn builder() -> ControlRegistryBuilder {
        ControlRegistryBuilder::new()
            .enum_control(
                "mode",
                "Mode",
                "single",
                vec![("single", "Single"), ("multiple", "Multiple")],
            )
            .bool_control("seeded", "Seeded", false)
    }

    fn state(pairs: &[(&str, &str)]) -> String {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        build_state(&pairs).unwrap()
    }

    #[test]
    fn test_initial_values_default() {
        assert_eq!(
            builder().initial_values(None),
            vec![
                ControlValue::String("single".into()),
                ControlValue::Bool(false)
            ]
        );
    }

    #[test]
    fn test_initial_values_from_state() {
        let encoded = state(&[("mode", "multiple"), ("seeded", "1")]);
        assert_eq!(
            builder().initial_values(Some(&encoded)),
            vec![
                ControlValue::String("multiple".into()),
                ControlValue::Bool(true)
            ]
        );
    }

    #[test]
    fn test_unknown_enum_value_uses_default() {
        let encoded = state(&[("mode", "triple")]);
        assert_eq!(
            builder().initial_values(Some(&encoded))[0],
            ControlValue::String("single".into())
        );
    }

    #[test]
    fn test_unreadable_state_uses_defaults() {
        assert_eq!(
            builder().initial_values(Some("%%%")),
            builder().initial_values(None)
        );
    }

    #[test]
    fn test_doc_attaches_to_last_control() {
        let b = builder().doc("Start with the first option selected");
        assert_eq!(b.controls[0].doc, None);
        assert_eq!(
            b.controls[1].doc,
            Some("Start with the first option selected")
        );
    }
}
