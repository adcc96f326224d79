//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! report from a seeded generator and render it through
//! [`output::emit`](crate::output::emit).

pub mod analytical;
pub mod demo;
pub mod five;
pub mod mc;
pub mod path;
pub mod paths;

use crate::config::StraddleConfig;

/// Volatility and horizon for one command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Market {
    /// Annualised volatility
    pub volatility: f64,
    /// Horizon in years
    pub time: f64,
}

impl Market {
    /// Fill missing command-line values from the configuration
    pub fn resolve(volatility: Option<f64>, time: Option<f64>, config: &StraddleConfig) -> Self {
        Self {
            volatility: volatility.unwrap_or(config.volatility),
            time: time.unwrap_or(config.time),
        }
    }
}

impl From<&StraddleConfig> for Market {
    fn from(config: &StraddleConfig) -> Self {
        Self::resolve(None, None, config)
    }
}
