//! Simulation input types and structured errors.
//!
//! This module provides:
//! - `params`: Validated, immutable Monte Carlo inputs and the trading calendar constant
//! - `error`: Structured error type for parameter validation and sampling failures
//!
//! # Re-exports
//!
//! - [`SimulationParameters`], [`SimulationParametersBuilder`], [`TRADING_DAYS_PER_YEAR`] from `params`
//! - [`PricingError`], [`PricingResult`] from `error`

pub mod error;
pub mod params;

pub use error::{PricingError, PricingResult};
pub use params::{
    n_days_for, validate_horizon, SimulationParameters, SimulationParametersBuilder,
    DEFAULT_BATCH_PATHS, DEFAULT_PATHS, MAX_DAYS, MAX_MATRIX_ELEMENTS, MAX_PATHS,
    TRADING_DAYS_PER_YEAR,
};
