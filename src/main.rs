//! Boostscan - DexScreener Top-Volume Token Scanner
//!
//! Fetches DexScreener's boosted token candidates and reports the one with
//! the highest 24h trading volume.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use boostscan::adapters::cli::{CliApp, Command, ScanCmd};
use boostscan::adapters::dexscreener::{DexScreenerClient, DexScreenerConfig};
use boostscan::application::{BoostScanner, ScannerOptions};
use boostscan::config::{load_config, Config};
use boostscan::ports::candidate_source::CandidateSourcePort;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (endpoint overrides go here, not in config.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    let config = load_app_config(&app)?;
    init_logging(app.verbose, app.debug, &config.logging.level);

    match app.command {
        Command::Scan(cmd) => scan_command(cmd, &config).await,
        Command::Boosts(_) => boosts_command(&config).await,
    }
}

/// Resolve the config file referenced by the active command, falling back to
/// built-in defaults when none is given.
fn load_app_config(app: &CliApp) -> Result<Config> {
    let path = match &app.command {
        Command::Scan(cmd) => cmd.config.as_ref(),
        Command::Boosts(cmd) => cmd.config.as_ref(),
    };

    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Initialize logging system
///
/// CLI flags take precedence over the configured level; RUST_LOG wins over both.
fn init_logging(verbose: bool, debug: bool, config_level: &str) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        config_level
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Handle scan command
async fn scan_command(cmd: ScanCmd, config: &Config) -> Result<()> {
    tracing::info!("Scanning DexScreener boosted tokens for the top 24h volume...");

    let client = DexScreenerClient::with_config(DexScreenerConfig::from(config))
        .context("Failed to create DexScreener client")?;

    let options = ScannerOptions {
        skip_unreachable: cmd.skip_unreachable || config.scanner.skip_unreachable,
    };

    let scanner = BoostScanner::new(client.clone(), client).with_options(options);
    let payload = scanner.scan_payload().await;

    if cmd.pretty {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", payload);
    }

    Ok(())
}

/// Handle boosts command
async fn boosts_command(config: &Config) -> Result<()> {
    let client = DexScreenerClient::with_config(DexScreenerConfig::from(config))
        .context("Failed to create DexScreener client")?;

    let candidates = client
        .fetch_candidates()
        .await
        .context("Failed to fetch boosted token candidates")?;

    println!("{} boosted candidates:", candidates.len());
    for candidate in &candidates {
        println!("  {:<12} {}", candidate.chain_id, candidate.token_address);
    }

    Ok(())
}
