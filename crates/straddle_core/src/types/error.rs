//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and sampling
//! - `PricingResult`: Result alias used throughout the pricing layers

use thiserror::Error;

/// Result alias for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Categorised pricing errors.
///
/// Every estimator is a single sampling pass with no external dependencies,
/// so the only failure modes are invalid inputs and a distribution that
/// cannot be constructed.
///
/// # Examples
/// ```
/// use straddle_core::types::PricingError;
///
/// let err = PricingError::negative("volatility", -0.2);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'volatility' = -0.2: must be non-negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A numeric input is out of its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value, rendered for display.
        value: String,
        /// Constraint the value violated.
        reason: &'static str,
    },

    /// The sampling distribution could not be constructed.
    #[error("Distribution error: {0}")]
    Distribution(String),
}

impl PricingError {
    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Value is NaN or infinite.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::invalid(name, value, "must be finite")
    }

    /// Value is below zero.
    pub fn negative(name: &'static str, value: f64) -> Self {
        Self::invalid(name, value, "must be non-negative")
    }

    /// Value is zero or below where a strictly positive value is required.
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        Self::invalid(name, value, "must be positive")
    }

    /// Returns the offending parameter name, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            Self::Distribution(_) => None,
        }
    }
}

/// Checks that `value` is finite and non-negative.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] naming `name` otherwise.
pub fn ensure_non_negative(name: &'static str, value: f64) -> PricingResult<f64> {
    if !value.is_finite() {
        return Err(PricingError::non_finite(name, value));
    }
    if value < 0.0 {
        return Err(PricingError::negative(name, value));
    }
    Ok(value)
}

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] naming `name` otherwise.
pub fn ensure_positive(name: &'static str, value: f64) -> PricingResult<f64> {
    ensure_non_negative(name, value)?;
    if value == 0.0 {
        return Err(PricingError::non_positive(name, value));
    }
    Ok(value)
}
