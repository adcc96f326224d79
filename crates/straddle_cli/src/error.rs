//! CLI error types

use straddle_core::PricingError;
use thiserror::Error;

use crate::config::{ConfigError, OutputFormat};

/// Errors surfaced by the `straddle` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output format {format} is not supported by the {command} command")]
    UnsupportedFormat {
        command: &'static str,
        format: OutputFormat,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_conversion() {
        let err: CliError = PricingError::negative("volatility", -0.1).into();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = CliError::UnsupportedFormat {
            command: "demo",
            format: OutputFormat::Csv,
        };
        assert_eq!(
            err.to_string(),
            "Output format csv is not supported by the demo command"
        );
    }
}
