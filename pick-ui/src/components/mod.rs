//! Selector components

pub mod icons;
pub mod selector;
pub mod styles;

pub use icons::{ChevronDownIcon, XIcon};
pub use selector::{Selector, SelectorMode};
pub use styles::{SelectorStyles, SELECTOR_CSS};
