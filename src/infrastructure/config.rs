//! Configuration management
//!
//! Loads configuration from config.toml at startup.
//! Fungibles and markets are configured here rather than hardcoded.

use crate::core::listing::split_symbol;
use crate::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fungible symbols registered at startup
    #[serde(default = "default_fungibles")]
    pub fungibles: Vec<String>,

    /// Markets (listing on a venue with its bases)
    #[serde(default)]
    pub markets: Vec<MarketConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by RUST_LOG
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files
    #[serde(default = "default_log_dir")]
    pub directory: PathBuf,

    /// Write file logs as JSON lines
    #[serde(default)]
    pub json: bool,
}

/// One market entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketConfig {
    pub exchange: String,

    /// Listing symbol, `BASE.QUOTE`
    pub listing: String,

    /// Price basis denominator (100 = 0.01 increments)
    pub price_basis: i64,

    /// Volume basis denominator
    pub volume_basis: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            fungibles: default_fungibles(),
            markets: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: default_log_dir(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_fungibles() -> Vec<String> {
    vec!["BTC".to_string(), "USD".to_string()]
}

impl Config {
    /// Load configuration from the file named by CONFIG_PATH (default config.toml)
    ///
    /// If the file doesn't exist, returns default configuration.
    /// # Errors
    /// Returns error if file exists but cannot be read or parsed.
    pub fn load() -> std::result::Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File not found - use defaults
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::IoError(e)),
        }
    }

    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Check bases and listing symbols before anything is built from them
    pub fn validate(&self) -> Result<()> {
        for market in &self.markets {
            if market.price_basis <= 0 || market.volume_basis <= 0 {
                return Err(SchemaError::InvalidConfiguration(format!(
                    "market {}:{} has non-positive basis (price {}, volume {})",
                    market.exchange, market.listing, market.price_basis, market.volume_basis
                )));
            }
            let (base, quote) = split_symbol(&market.listing)?;
            for side in [base, quote] {
                if !self.fungibles.iter().any(|f| f == side) {
                    return Err(SchemaError::InvalidConfiguration(format!(
                        "market {}:{} uses unregistered fungible {:?}",
                        market.exchange, market.listing, side
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    /// Parse error (invalid TOML)
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}
