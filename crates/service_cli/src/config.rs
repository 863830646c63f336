//! CLI configuration management
//!
//! Settings come from four layers, highest precedence first:
//! 1. Command-line flags
//! 2. Environment variables (`PRNG_LOG_LEVEL`, `PRNG_ALPHA`, `PRNG_LENGTH`, `PRNG_BINS`)
//! 3. TOML configuration file
//! 4. Default values

use prng_core::traits::validate_alpha;
use prng_core::types::{ConfigError, TestOptions};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{CliError, Result};

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "PRNG_LOG_LEVEL";
/// Environment variable holding the significance level.
pub const ENV_ALPHA: &str = "PRNG_ALPHA";
/// Environment variable holding the sequence length.
pub const ENV_LENGTH: &str = "PRNG_LENGTH";
/// Environment variable holding the interval count.
pub const ENV_BINS: &str = "PRNG_BINS";

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command output is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Resolved settings shared by all subcommands
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Sequence length for `generate` and `run`
    pub length: usize,
    /// Significance level for the randomness tests
    pub alpha: f64,
    /// Requested interval count for the uniformity test
    pub bins: Option<usize>,
    /// Trace steps shown when tracing is requested (0 shows all)
    pub trace_rows: usize,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = CliError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            length: 1000,
            alpha: 0.05,
            bins: None,
            trace_rows: 20,
            log_level: LogLevel::Info,
            format: OutputFormat::Text,
        }
    }
}

/// Overrides collected from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `-n/--length`
    pub length: Option<usize>,
    /// `--alpha`
    pub alpha: Option<f64>,
    /// `--bins`
    pub bins: Option<usize>,
    /// `--trace-rows`
    pub trace_rows: Option<usize>,
    /// `--log-level`
    pub log_level: Option<String>,
    /// `--format`
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(alpha) = lookup(ENV_ALPHA) {
            self.alpha = parse_env(ENV_ALPHA, &alpha)?;
        }
        if let Some(length) = lookup(ENV_LENGTH) {
            self.length = parse_env(ENV_LENGTH, &length)?;
        }
        if let Some(bins) = lookup(ENV_BINS) {
            self.bins = Some(parse_env(ENV_BINS, &bins)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<()> {
        if let Some(length) = cli.length {
            self.length = length;
        }
        if let Some(alpha) = cli.alpha {
            self.alpha = alpha;
        }
        if let Some(bins) = cli.bins {
            self.bins = Some(bins);
        }
        if let Some(rows) = cli.trace_rows {
            self.trace_rows = rows;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLength.into());
        }
        validate_alpha(self.alpha)?;
        Ok(())
    }

    /// Options handed to the randomness tests
    pub fn test_options(&self) -> TestOptions {
        TestOptions { bins: self.bins }
    }
}

fn parse_env<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::EnvError(format!("{}={} is not a valid value", key, raw)))
}

/// Build configuration from all sources
pub fn build_config(config_file: Option<&Path>, cli: &CliOverrides) -> Result<CliConfig> {
    let mut config = match config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
