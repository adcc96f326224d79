//! # straddle_core: Foundation for Straddle Pricing
//!
//! ## Foundation Role
//!
//! straddle_core is the bottom layer of the workspace, providing:
//! - Immutable simulation inputs: [`SimulationParameters`] (`types::params`)
//! - Error types: [`PricingError`] (`types::error`)
//! - Trading calendar constants (`types::params::TRADING_DAYS_PER_YEAR`)
//! - Sample statistics used to summarise repeated estimates (`math::stats`)
//!
//! The crate has no random number generation and performs no I/O; both live
//! in the layers above it.
//!
//! ## Usage Example
//!
//! ```rust
//! use straddle_core::types::SimulationParameters;
//!
//! let params = SimulationParameters::builder()
//!     .volatility(0.2)
//!     .time(0.5)
//!     .n_paths(1_000)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.n_days(), 126);
//! assert!((params.daily_volatility() - 0.2 / 252_f64.sqrt()).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`SimulationParameters`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{PricingError, SimulationParameters};
