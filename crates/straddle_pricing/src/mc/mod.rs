//! Monte Carlo straddle simulation.
//!
//! Daily returns are IID normal with mean 0 and standard deviation
//! `σ / √252`, compounded multiplicatively over `floor(t · 252)` days. The
//! straddle pays the absolute terminal return `|∏(1 + r) − 1|`.
//!
//! # Architecture
//!
//! ```text
//! SimulationParameters ─┐
//! PricerRng ────────────┼─> straddle_price_mc()    path loop, n_days scratch buffer
//!                       ├─> five_prices()          5 batches over one ReturnMatrix
//!                       ├─> simulate_asset_path()  one PathResult
//!                       └─> simulate_price_paths() PriceTable for charting
//! ```
//!
//! # Draw Order
//!
//! The loop estimator and the single-path simulator both draw a path's
//! `n_days` returns consecutively. With one path and equal seeds they
//! therefore produce the same straddle return bit for bit:
//!
//! ```rust
//! use straddle_core::SimulationParameters;
//! use straddle_pricing::mc::{simulate_asset_path, straddle_price_mc};
//! use straddle_pricing::rng::PricerRng;
//!
//! let params = SimulationParameters::new(0.2, 1.0, 1).unwrap();
//! let mc = straddle_price_mc(&params, &mut PricerRng::from_seed(42)).unwrap();
//! let path = simulate_asset_path(0.2, 1.0, &mut PricerRng::from_seed(42)).unwrap();
//!
//! assert_eq!(mc, path.straddle_return());
//! ```
//!
//! The vectorised estimators draw a day-major matrix (all paths for day 0,
//! then day 1, ...) instead.

pub mod estimator;
pub mod path;
pub mod workspace;

pub use estimator::{
    estimate_mc, five_prices, straddle_price_mc, FiveBatchEstimate, McEstimate, N_BATCHES,
};
pub use path::{simulate_asset_path, simulate_price_paths, PathResult, PriceTable};
pub use workspace::ReturnMatrix;
