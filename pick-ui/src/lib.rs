//! pick-ui - Dropdown selector component for dioxus
//!
//! Pure view code: the selection model lives in `pick-common`, this crate
//! renders it and turns DOM events into selector events.

pub mod components;

pub use components::*;
pub use pick_common::{Comparison, OptionRef, OptionValue, SelectOption};
