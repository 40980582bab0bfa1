//! Configuration management for the labeling pipeline

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub inputs: InputsConfig,
    pub output: OutputConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Input file locations
#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    /// Fraud report file (confirmed fraudulent transactions)
    pub fraud_transactions: String,
    /// Untagged transaction file (unknown fraud status)
    pub untagged_transactions: String,
    /// Optional account-level data published alongside the output
    #[serde(default)]
    pub account_info: Option<String>,
}

/// Output file location
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Labeled transaction file
    pub transactions: String,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the published files are stored under
    pub root: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inputs: InputsConfig {
                fraud_transactions: "data/fraud_transactions.csv".to_string(),
                untagged_transactions: "data/untagged_transactions.csv".to_string(),
                account_info: None,
            },
            output: OutputConfig {
                transactions: "data/transactions.csv".to_string(),
            },
            storage: StorageConfig {
                root: "store".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
