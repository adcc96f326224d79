//! Analytical (closed-form) straddle prices.
//!
//! These formulas give the deterministic reference the Monte Carlo
//! estimators converge towards.
//!
//! # Available Solutions
//!
//! - **ATMF straddle approximation**: `(2/√(2π)) · σ · √t`, the expected
//!   absolute terminal return of a zero-drift process
//! - **Lognormal ATMF straddle**: exact Black-Scholes value at the forward,
//!   `2 · (2N(σ√t/2) − 1)`, of which the approximation is the first-order term
//!
//! # Usage
//!
//! ```rust
//! use straddle_pricing::analytical::{lognormal_straddle_price, straddle_price};
//!
//! let approx = straddle_price(0.2, 1.0).unwrap();
//! let exact = lognormal_straddle_price(0.2, 1.0).unwrap();
//! assert!((approx - exact).abs() < 1e-3);
//! ```

pub mod straddle;

pub use straddle::{
    lognormal_straddle_price, straddle_price, straddle_price_unchecked, STRADDLE_COEFFICIENT,
};
