//! State presets for quick configuration switching

use super::registry::{ControlDef, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key, ControlValue::String(value.to_string()));
        self
    }

    /// Full control state this preset stands for: every control at its
    /// default unless the preset overrides it.
    pub fn resolve(&self, controls: &[ControlDef]) -> Vec<(&'static str, ControlValue)> {
        controls
            .iter()
            .map(|control| {
                let value = self
                    .values
                    .get(control.key)
                    .cloned()
                    .unwrap_or_else(|| control.default.clone());
                (control.key, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> Vec<ControlDef> {
        vec![
            ControlDef::new("mode", "Mode", ControlValue::String("single".into())),
            ControlDef::new("seeded", "Seeded", ControlValue::Bool(false)),
        ]
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = Preset::new("Default").resolve(&controls());
        assert_eq!(
            resolved,
            vec![
                ("mode", ControlValue::String("single".into())),
                ("seeded", ControlValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn test_resolve_overrides() {
        let preset = Preset::new("Seeded multiple")
            .set_string("mode", "multiple")
            .set_bool("seeded", true);
        assert_eq!(
            preset.resolve(&controls()),
            vec![
                ("mode", ControlValue::String("multiple".into())),
                ("seeded", ControlValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn test_resolve_ignores_unknown_keys() {
        let preset = Preset::new("Stray").set_bool("missing", true);
        assert_eq!(preset.resolve(&controls()).len(), 2);
    }
}
