use crate::{Comparison, OptionRef};

/// A selection shape owned by the host.
///
/// Implemented for `Option<OptionRef>` (single mode) and `Vec<OptionRef>`
/// (multiple mode). Methods never mutate; they describe the value the host
/// should be handed next.
pub trait Selection: Clone + PartialEq + 'static {
    /// The selection after the user picks `option`, or `None` when nothing
    /// should be reported.
    fn toggled(&self, option: &OptionRef, comparison: Comparison) -> Option<Self>;

    /// The selection without `option`, or `None` when it was not selected.
    /// Never adds anything.
    fn removed(&self, option: &OptionRef, comparison: Comparison) -> Option<Self>;

    /// The empty selection
    fn cleared() -> Self;

    fn contains(&self, option: &OptionRef, comparison: Comparison) -> bool;

    fn is_empty(&self) -> bool;

    /// Number of selected options
    fn count(&self) -> usize;
}

/// Single mode. Picking the current value again is a no-op.
impl Selection for Option<OptionRef> {
    fn toggled(&self, option: &OptionRef, comparison: Comparison) -> Option<Self> {
        match self {
            Some(current) if comparison.matches(current, option) => None,
            _ => Some(Some(option.clone())),
        }
    }

    fn removed(&self, option: &OptionRef, comparison: Comparison) -> Option<Self> {
        Selection::contains(self, option, comparison).then_some(None)
    }

    fn cleared() -> Self {
        None
    }

    fn contains(&self, option: &OptionRef, comparison: Comparison) -> bool {
        self.as_ref()
            .is_some_and(|current| comparison.matches(current, option))
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn count(&self) -> usize {
        usize::from(self.is_some())
    }
}

/// Multiple mode. Picking toggles membership; new members go to the end.
impl Selection for Vec<OptionRef> {
    fn toggled(&self, option: &OptionRef, comparison: Comparison) -> Option<Self> {
        if Selection::contains(self, option, comparison) {
            Some(
                self.iter()
                    .filter(|v| !comparison.matches(v, option))
                    .cloned()
                    .collect(),
            )
        } else {
            let mut next = self.clone();
            next.push(option.clone());
            Some(next)
        }
    }

    fn removed(&self, option: &OptionRef, comparison: Comparison) -> Option<Self> {
        Selection::contains(self, option, comparison).then(|| {
            self.iter()
                .filter(|v| !comparison.matches(v, option))
                .cloned()
                .collect()
        })
    }

    fn cleared() -> Self {
        Vec::new()
    }

    fn contains(&self, option: &OptionRef, comparison: Comparison) -> bool {
        self.iter().any(|v| comparison.matches(v, option))
    }

    fn is_empty(&self) -> bool {
        <[OptionRef]>::is_empty(self)
    }

    fn count(&self) -> usize {
        self.len()
    }
}
