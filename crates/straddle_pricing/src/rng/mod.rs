//! # Random Number Generation Infrastructure
//!
//! This module provides the random number generator injected into every
//! estimator in the kernel.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators carry a seed; entropy-seeded
//!   generators record the drawn seed so any run can be replayed
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Injection**: No estimator touches a global generator
//!
//! ## Usage Example
//!
//! ```rust
//! use straddle_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal_scaled(&mut buffer, 0.0, 0.0126).unwrap();
//! ```

mod prng;

pub use prng::PricerRng;
