//! Command-line interface
//!
//! Argument parsing and the command handlers behind the `ghostwake` binary.

pub mod args;
pub mod commands;
