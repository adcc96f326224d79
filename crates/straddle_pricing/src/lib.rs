//! # Straddle Pricing Kernel
//!
//! Estimators for the price of an at-the-money-forward straddle, quoted as a
//! fraction of spot:
//!
//! - [`analytical`]: closed-form approximation `(2/√(2π)) · σ · √t`
//! - [`mc`]: Monte Carlo estimators over simulated daily returns, the
//!   single-path simulator and the multi-path price table
//! - [`rng`]: seeded random number generation injected into every estimator
//!
//! Every estimator is a pure function of its inputs and the [`PricerRng`]
//! passed to it. There is no global randomness source, so a seeded run is
//! reproducible bit for bit.
//!
//! ## Usage Example
//!
//! ```rust
//! use straddle_pricing::analytical::straddle_price;
//! use straddle_pricing::mc::{five_prices, straddle_price_mc};
//! use straddle_pricing::rng::PricerRng;
//! use straddle_core::SimulationParameters;
//!
//! let analytical = straddle_price(0.2, 1.0).unwrap();
//! assert!((analytical - 0.1596).abs() < 1e-4);
//!
//! let mut rng = PricerRng::from_seed(42);
//! let params = SimulationParameters::new(0.2, 1.0, 1_000).unwrap();
//! let mc = straddle_price_mc(&params, &mut rng).unwrap();
//! assert!((mc - analytical).abs() < 0.02);
//!
//! let batches = five_prices(&params, &mut rng).unwrap();
//! assert_eq!(batches.prices().len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod mc;
pub mod pricer;
pub mod rng;

// Re-export commonly used items for convenience
pub use analytical::straddle_price;
pub use mc::{
    five_prices, simulate_asset_path, simulate_price_paths, straddle_price_mc, FiveBatchEstimate,
    McEstimate, PathResult, PriceTable,
};
pub use pricer::StraddlePricer;
pub use rng::PricerRng;
pub use straddle_core::{PricingError, SimulationParameters};
