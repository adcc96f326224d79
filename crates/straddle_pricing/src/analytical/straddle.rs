//! ATMF straddle closed-form prices.
//!
//! Both prices are quoted as a fraction of the forward, with zero rates.
//!
//! # Mathematical Background
//!
//! If the terminal return X is normal with mean 0 and standard deviation
//! σ√t, the straddle pays |X| and
//!
//! ```text
//! E|X| = σ√t · √(2/π) = (2/√(2π)) · σ · √t
//! ```
//!
//! Under lognormal dynamics the same position at the forward is worth
//!
//! ```text
//! C + P = 2 · (N(d1) − N(d2)) = 2 · (2N(σ√t/2) − 1),   d1 = −d2 = σ√t/2
//! ```
//!
//! whose Taylor expansion in σ√t recovers the first formula.

use num_traits::Float;
use straddle_core::types::error::ensure_non_negative;
use straddle_core::types::PricingResult;

/// `2/√(2π)`, the half-normal mean of a unit normal.
pub const STRADDLE_COEFFICIENT: f64 = 0.797_884_560_802_865_4;

/// ATMF straddle approximation without input validation.
///
/// Returns `(2/√(2π)) · volatility · √time` for any inputs, so NaN in gives
/// NaN out. Prefer [`straddle_price`] at API boundaries.
#[inline]
pub fn straddle_price_unchecked<T: Float>(volatility: T, time: T) -> T {
    let coefficient = T::from(STRADDLE_COEFFICIENT).unwrap_or_else(T::zero);
    coefficient * volatility * time.sqrt()
}

/// ATMF straddle price approximation, `(2/√(2π)) · σ · √t`.
///
/// # Arguments
///
/// * `volatility` - Annualised volatility (σ ≥ 0)
/// * `time` - Time to maturity in years (t ≥ 0)
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`](straddle_core::PricingError::InvalidParameter)
/// if either input is negative or not finite.
///
/// # Example
///
/// ```rust
/// use straddle_pricing::analytical::straddle_price;
///
/// let price = straddle_price(0.2, 1.0).unwrap();
/// assert!((price - 0.159_576_912_160_573).abs() < 1e-12);
///
/// assert_eq!(straddle_price(0.0, 1.0).unwrap(), 0.0);
/// assert!(straddle_price(-0.2, 1.0).is_err());
/// ```
pub fn straddle_price(volatility: f64, time: f64) -> PricingResult<f64> {
    let volatility = ensure_non_negative("volatility", volatility)?;
    let time = ensure_non_negative("time", time)?;
    Ok(straddle_price_unchecked(volatility, time))
}

/// Standard normal CDF approximation.
///
/// Uses the Abramowitz and Stegun 7.1.26 approximation for the error
/// function (absolute error below 1.5e-7).
#[inline]
fn norm_cdf<T: Float>(x: T) -> T {
    let c = |v: f64| T::from(v).unwrap_or_else(T::zero);
    let one = T::one();
    let zero = T::zero();

    if x.abs() > c(8.0) {
        return if x > zero { one } else { zero };
    }

    let a1 = c(0.254829592);
    let a2 = c(-0.284496736);
    let a3 = c(1.421413741);
    let a4 = c(-1.453152027);
    let a5 = c(1.061405429);
    let p = c(0.3275911);

    let arg = -x / c(std::f64::consts::SQRT_2);
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();
    let erfc_val = if arg < zero { c(2.0) - erfc_abs } else { erfc_abs };

    c(0.5) * erfc_val
}

/// Exact lognormal ATMF straddle price, `2 · (2N(σ√t/2) − 1)`.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`](straddle_core::PricingError::InvalidParameter)
/// if either input is negative or not finite.
///
/// # Example
///
/// ```rust
/// use straddle_pricing::analytical::{lognormal_straddle_price, straddle_price};
///
/// let exact = lognormal_straddle_price(0.2, 1.0).unwrap();
/// let approx = straddle_price(0.2, 1.0).unwrap();
/// assert!(exact < approx);
/// ```
pub fn lognormal_straddle_price(volatility: f64, time: f64) -> PricingResult<f64> {
    let volatility = ensure_non_negative("volatility", volatility)?;
    let time = ensure_non_negative("time", time)?;
    let half_total_vol = 0.5 * volatility * time.sqrt();
    if half_total_vol == 0.0 {
        return Ok(0.0);
    }
    Ok(2.0 * (2.0 * norm_cdf(half_total_vol) - 1.0))
}
