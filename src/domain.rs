//! Domain logic
//!
//! This module contains the storefront's business rules, free of any I/O:
//! - The cart manager and its derived views
//! - Product catalog entries
//! - Money formatting and order hand-off links
//! - Transient notifications

pub mod cart;
pub mod catalog;
pub mod money;
pub mod notification;
pub mod order;
pub mod text;
