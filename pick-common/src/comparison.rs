use crate::OptionRef;

/// How selection membership and equality are decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Same allocation. Options with equal content stay distinct.
    Identity,
    /// Equal label and value
    Structural,
}

#[allow(clippy::derivable_impls)]
impl Default for Comparison {
    fn default() -> Self {
        Comparison::Identity
    }
}

impl Comparison {
    pub fn matches(self, a: &OptionRef, b: &OptionRef) -> bool {
        match self {
            Comparison::Identity => a.same(b),
            Comparison::Structural => **a == **b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Comparison::default(), Comparison::Identity);
    }

    #[test]
    fn test_identity_vs_structural() {
        let a = OptionRef::new("one", 1);
        let b = OptionRef::new("one", 1);
        let c = OptionRef::new("one", 2);

        assert!(Comparison::Identity.matches(&a, &a.clone()));
        assert!(!Comparison::Identity.matches(&a, &b));
        assert!(Comparison::Structural.matches(&a, &b));
        assert!(!Comparison::Structural.matches(&a, &c));
    }
}
