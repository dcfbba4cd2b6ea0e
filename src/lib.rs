//! # Cartui - Terminal storefront
//!
//! A shopping-cart storefront for the terminal, built with Rust and Ratatui.
//! Visitors browse a catalog, collect items in a cart with a running total
//! and check out by handing a composed order message to a messaging link.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Functions that transform state
//! - **Command** (`core::cmd`): Side effects (timers, hand-off, rendering)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! The cart itself lives in [`domain::cart`] and has no I/O of its own.
//!
//! ## Example Usage
//!
//! ```rust
//! use cartui::{
//!     core::{msg::{cart::CartMsg, Msg}, state::AppState, update::update},
//!     domain::cart::CartItem,
//! };
//!
//! let state = AppState::default();
//! let necklace = CartItem::new("Necklace", 1500, "img/necklace.jpg", "₹1,500");
//!
//! let (state, _commands) = update(Msg::Cart(CartMsg::Add(necklace)), state);
//!
//! assert_eq!(state.cart.cart.total(), 1500);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use crate::integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
