//! Event handling for a selector, independent of any renderer
//!
//! The renderer translates DOM events into [`SelectorEvent`]s and calls
//! [`dispatch`]. Dropdown state is updated in place before `dispatch`
//! returns; the returned selection (if any) is what the host's change
//! callback receives.

use crate::{Comparison, DropdownState, OptionRef, Selection};

/// User interactions a selector reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    /// Click on the container (the open/close toggle)
    ToggleClicked,
    /// The container lost focus
    FocusLost,
    /// Click on the list item at this position
    OptionClicked(usize),
    /// Pointer entered the list item at this position
    OptionHovered(usize),
    /// Click on a chip's remove control (multiple mode). Does not reach the toggle.
    ChipRemoved(OptionRef),
    /// Click on the clear control. Does not reach the toggle.
    ClearClicked,
}

/// Apply `event` to `dropdown` and return the selection to report, if any.
pub fn dispatch<S: Selection>(
    dropdown: &mut DropdownState,
    selection: &S,
    options: &[OptionRef],
    comparison: Comparison,
    event: SelectorEvent,
) -> Option<S> {
    match event {
        SelectorEvent::ToggleClicked => {
            dropdown.toggle();
            None
        }
        SelectorEvent::FocusLost => {
            dropdown.close();
            None
        }
        SelectorEvent::OptionClicked(index) => {
            let option = options.get(index)?;
            let change = selection.toggled(option, comparison);
            dropdown.close();
            change
        }
        SelectorEvent::OptionHovered(index) => {
            dropdown.highlight(index, options.len());
            None
        }
        SelectorEvent::ChipRemoved(option) => selection.removed(&option, comparison),
        SelectorEvent::ClearClicked => {
            if selection.is_empty() {
                None
            } else {
                Some(S::cleared())
            }
        }
    }
}
