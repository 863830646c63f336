//! Error types for the command-line front end.

use prng_core::types::ConfigError;
use prng_models::export::ExportError;
use thiserror::Error;

/// Every failure the `prng` binary can report.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid generator or test configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Sequence file could not be written or read.
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
