//! Shared UI components for pick-mocks

mod link_card;

pub use link_card::LinkCard;
