//! CLI Adapter
//!
//! Command-line interface for the boost scanner.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{BoostsCmd, CliApp, Command, ScanCmd};
