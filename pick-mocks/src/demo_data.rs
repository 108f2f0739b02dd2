//! Option lists used by the demo and mock pages

use pick_common::OptionRef;

/// The four numbered options of the demo page
pub fn numbers() -> Vec<OptionRef> {
    OptionRef::list(&[("one", 1), ("two", 2), ("three", 3), ("four", 4)])
}

/// Options that share content pairwise but are distinct options
pub fn lookalikes() -> Vec<OptionRef> {
    OptionRef::list(&[("red", "red"), ("red", "red"), ("blue", "blue"), ("blue", "blue")])
}

/// Enough options to make the list scroll
pub fn long_list() -> Vec<OptionRef> {
    (1..=40)
        .map(|i| OptionRef::new(format!("Option {}", i), i))
        .collect()
}

/// Fresh option list for a mock control value
pub fn option_set(name: &str) -> Vec<OptionRef> {
    match name {
        "lookalikes" => lookalikes(),
        "long" => long_list(),
        _ => numbers(),
    }
}

/// Labels of the selection for on-page display
pub fn describe(selection: &[OptionRef]) -> String {
    if selection.is_empty() {
        "(none)".to_string()
    } else {
        selection
            .iter()
            .map(|o| format!("{} ({})", o.label, o.value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pick_common::Comparison;

    #[test]
    fn test_option_sets() {
        assert_eq!(option_set("numbers").len(), 4);
        assert_eq!(option_set("long").len(), 40);
        assert_eq!(option_set("unknown").len(), 4);
    }

    #[test]
    fn test_lookalikes_are_distinct_but_equal_in_content() {
        let options = lookalikes();
        assert_ne!(options[0], options[1]);
        assert!(Comparison::Structural.matches(&options[0], &options[1]));
    }

    #[test]
    fn test_each_call_builds_new_options() {
        assert_ne!(numbers()[0], numbers()[0]);
    }

    #[test]
    fn test_describe() {
        let options = numbers();
        assert_eq!(describe(&[]), "(none)");
        assert_eq!(
            describe(&[options[1].clone(), options[3].clone()]),
            "two (2), four (4)"
        );
    }
}
