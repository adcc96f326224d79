//! Configuration management
//!
//! Loads defaults for every command from a TOML file and environment
//! variables; command-line arguments take precedence over both.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use straddle_core::types::{DEFAULT_BATCH_PATHS, DEFAULT_PATHS};
use thiserror::Error;

/// Default configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "straddle.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
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

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result rendering on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Defaults for every command
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StraddleConfig {
    /// Annualised volatility
    pub volatility: f64,
    /// Horizon in years
    pub time: f64,
    /// RNG seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Paths for the loop estimator
    pub mc_paths: usize,
    /// Paths per batch for the five-batch estimator
    pub batch_paths: usize,
    /// Columns of the simulated path table
    pub table_paths: usize,
    /// Rows shown from a single simulated path
    pub head_rows: usize,
    /// Log level when `RUST_LOG` is not set
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for StraddleConfig {
    fn default() -> Self {
        Self {
            volatility: 0.2,
            time: 1.0,
            seed: None,
            mc_paths: DEFAULT_PATHS,
            batch_paths: DEFAULT_BATCH_PATHS,
            table_paths: 4,
            head_rows: 5,
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
        }
    }
}

fn parse_env<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvError(format!("{} has invalid value '{}'", name, raw))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvError(format!("{}: {}", name, e))),
    }
}

impl StraddleConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply environment variable overrides
    ///
    /// Recognised variables: `STRADDLE_VOLATILITY`, `STRADDLE_TIME`,
    /// `STRADDLE_SEED`, `STRADDLE_LOG_LEVEL`, `STRADDLE_FORMAT`.
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Some(volatility) = parse_env("STRADDLE_VOLATILITY")? {
            self.volatility = volatility;
        }
        if let Some(time) = parse_env("STRADDLE_TIME")? {
            self.time = time;
        }
        if let Some(seed) = parse_env("STRADDLE_SEED")? {
            self.seed = Some(seed);
        }
        if let Ok(level) = std::env::var("STRADDLE_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Ok(format) = std::env::var("STRADDLE_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Only checks what the pricing layers cannot: numeric domains of
    /// volatility and horizon are reported by the estimators themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("mc_paths", self.mc_paths),
            ("batch_paths", self.batch_paths),
            ("table_paths", self.table_paths),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path; when absent the default file is used if it exists
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output format override
    pub format: Option<String>,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<StraddleConfig, ConfigError> {
    let config = match &cli.config_file {
        Some(path) => StraddleConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                StraddleConfig::from_file(default_path)?
            } else {
                StraddleConfig::default()
            }
        }
    };

    let mut config = config.with_env_override()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
