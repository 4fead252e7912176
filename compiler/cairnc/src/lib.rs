//! cairn compiler driver.
//!
//! The binary in `main.rs` only matches arguments; everything it runs lives
//! here so it can be tested without spawning a process.

pub mod commands;
pub mod options;
mod tracing_setup;

pub use tracing_setup::init_tracing;
