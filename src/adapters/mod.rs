//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: candidate discovery and market data API client
//! - CLI: command-line interface definitions

pub mod cli;
pub mod dexscreener;

pub use cli::CliApp;
pub use dexscreener::{DexScreenerClient, DexScreenerConfig};
