//! Reusable widgets
//!
//! Plain ratatui widgets with no knowledge of `AppState`; components build
//! them from state and hand them styles from the configuration.

pub mod cart_line;
pub mod header;
pub mod product_card;
