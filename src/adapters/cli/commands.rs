//! CLI Command Definitions
//!
//! Argument structures for the boostscan binary. Command handlers live in
//! the binary entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Boostscan - DexScreener top-volume token scanner
#[derive(Parser, Debug)]
#[command(
    name = "boostscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Finds the token with the highest 24h trading volume on DexScreener",
    long_about = "Boostscan fetches DexScreener's boosted token candidates, enriches each \
                  one with market data, and reports the single token with the highest 24h \
                  trading volume."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the selection pipeline and print the highest-volume token
    Scan(ScanCmd),

    /// List the current boosted token candidates
    Boosts(BoostsCmd),
}

/// Run the selection pipeline
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip candidates whose market data fetch fails instead of aborting
    #[arg(long)]
    pub skip_unreachable: bool,

    /// Pretty-print the result payload
    #[arg(long)]
    pub pretty: bool,
}

/// List boosted candidates
#[derive(Parser, Debug)]
pub struct BoostsCmd {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
