//! Core error types for pmon-core.
//!
//! Everything that can go wrong happens before the first phase starts
//! (bad configuration, an output file that cannot be opened, signal
//! registration) or is a sink write failing mid-run.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pmon-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The status file given with `--output` could not be created
    #[error("Failed to open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Installing a signal handler failed
    #[error("Failed to register signal handler: {0}")]
    Signal(#[source] std::io::Error),

    /// IO errors while writing progress
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
