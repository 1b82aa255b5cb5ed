//! Configuration Loader
//!
//! Loads and validates configuration from TOML files. Every section has
//! built-in defaults, so a config file is optional and may be partial.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dexscreener: DexScreenerSection,
    #[serde(default)]
    pub scanner: ScannerSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// DexScreener API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DexScreenerSection {
    /// DexScreener API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DexScreenerSection {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DexScreenerSection {
    /// Get API base URL with environment variable override
    /// Checks DEXSCREENER_API_URL env var first, falls back to config value
    pub fn get_api_base_url(&self) -> String {
        std::env::var("DEXSCREENER_API_URL").unwrap_or_else(|_| self.api_base_url.clone())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Scanner behavior configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScannerSection {
    /// Skip candidates whose market data fetch fails instead of aborting the
    /// whole run
    #[serde(default)]
    pub skip_unreachable: bool,
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.dexscreener.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dexscreener.api_base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_base_url cannot be empty".to_string(),
            ));
        }

        if self.dexscreener.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "timeout_secs must be > 0, got {}",
                self.dexscreener.timeout_secs
            )));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "level must be one of {:?}, got {}",
                LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

// Conversion from Config to the DexScreener client configuration
impl From<&Config> for crate::adapters::dexscreener::DexScreenerConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_base_url: config.dexscreener.get_api_base_url(),
            timeout: config.dexscreener.timeout(),
        }
    }
}

// Conversion from Config to scanner options
impl From<&Config> for crate::application::ScannerOptions {
    fn from(config: &Config) -> Self {
        Self {
            skip_unreachable: config.scanner.skip_unreachable,
        }
    }
}
