//! Gallery pages

mod demo;
mod mock_index;

pub use demo::Demo;
pub use mock_index::{MockIndex, MockSelector};
