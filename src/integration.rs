//! Integration layer
//!
//! Glue between the pure core and the outside world:
//! - Runtime owning state and message/command queues
//! - Command executor for side effects
//! - Host loop, renderer and render/resize coalescing

pub mod app_runner;
pub mod cmd_executor;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
