//! pick-common - Pure selection model for the pick selector
//!
//! No rendering and no I/O: options, comparison policy, the single/multiple
//! selection shapes, and the transient open/highlight state, plus the event
//! dispatch that ties them together.

mod comparison;
mod dropdown_state;
mod interaction;
mod option;
mod selection;

pub use comparison::Comparison;
pub use dropdown_state::DropdownState;
pub use interaction::{dispatch, SelectorEvent};
pub use option::{OptionRef, OptionValue, SelectOption};
pub use selection::Selection;
