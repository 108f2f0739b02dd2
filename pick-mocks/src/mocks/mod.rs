//! Component mocks with interactive controls

pub mod framework;
mod selector;
pub mod url_state;

pub use selector::SelectorMock;
