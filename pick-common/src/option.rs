use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Value carried by an option, either text or a number
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(text) => f.write_str(text),
            OptionValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Number(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

/// One selectable item: a label shown to the user and the value behind it
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Shared handle to an option supplied by the host.
///
/// Equality is identity: two handles are equal only when they point at the
/// same allocation. Options with identical label and value built separately
/// are different options. Use [`crate::Comparison::Structural`] to compare
/// by content instead.
#[derive(Clone)]
pub struct OptionRef(Rc<SelectOption>);

impl OptionRef {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self(Rc::new(SelectOption::new(label, value)))
    }

    /// Whether both handles point at the same option
    pub fn same(&self, other: &OptionRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Build a list of fresh options from (label, value) pairs
    pub fn list<V: Into<OptionValue> + Clone>(pairs: &[(&str, V)]) -> Vec<OptionRef> {
        pairs
            .iter()
            .map(|(label, value)| OptionRef::new(*label, value.clone()))
            .collect()
    }
}

impl From<SelectOption> for OptionRef {
    fn from(option: SelectOption) -> Self {
        Self(Rc::new(option))
    }
}

impl Deref for OptionRef {
    type Target = SelectOption;

    fn deref(&self) -> &SelectOption {
        &self.0
    }
}

impl PartialEq for OptionRef {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for OptionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionRef")
            .field("label", &self.0.label)
            .field("value", &self.0.value)
            .field("ptr", &Rc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_keeps_identity() {
        let one = OptionRef::new("one", 1);
        let copy = one.clone();
        assert_eq!(one, copy);
        assert!(one.same(&copy));
    }

    #[test]
    fn test_same_content_is_a_different_option() {
        let a = OptionRef::new("one", 1);
        let b = OptionRef::new("one", 1);
        assert_ne!(a, b);
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_list_preserves_order() {
        let options = OptionRef::list(&[("one", 1), ("two", 2), ("three", 3)]);
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["one", "two", "three"]);
        assert_eq!(options[1].value, OptionValue::Number(2.0));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(OptionValue::from(4).to_string(), "4");
        assert_eq!(OptionValue::from(2.5).to_string(), "2.5");
        assert_eq!(OptionValue::from("abc").to_string(), "abc");
    }
}
