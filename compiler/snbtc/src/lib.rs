//! The `snbt` command-line driver.
//!
//! Command handlers live in [`commands`]; `main.rs` only dispatches on
//! arguments.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
