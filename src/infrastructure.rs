//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Order hand-off to the messaging service

pub mod cli;
pub mod config;
pub mod handoff;
pub mod tui;
