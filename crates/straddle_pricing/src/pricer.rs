//! Straddle pricing facade.
//!
//! [`StraddlePricer`] binds one set of [`SimulationParameters`] to one
//! [`PricerRng`] and exposes every estimator as a method. Successive calls
//! continue the same random stream; [`reset`](StraddlePricer::reset) rewinds
//! it.

use crate::analytical::straddle_price;
use crate::mc::{self, FiveBatchEstimate, McEstimate, PathResult, PriceTable};
use crate::rng::PricerRng;
use straddle_core::types::{PricingResult, SimulationParameters};

/// Monte Carlo and analytical straddle pricer.
///
/// # Examples
///
/// ```rust
/// use straddle_core::SimulationParameters;
/// use straddle_pricing::StraddlePricer;
///
/// let params = SimulationParameters::new(0.2, 1.0, 5_000).unwrap();
/// let mut pricer = StraddlePricer::new(params, Some(42));
///
/// let analytical = pricer.analytical().unwrap();
/// let mc = pricer.price_mc().unwrap();
/// assert!((mc.price - analytical).abs() < 5.0 * mc.std_error + 0.005);
/// ```
#[derive(Clone, Debug)]
pub struct StraddlePricer {
    params: SimulationParameters,
    rng: PricerRng,
}

impl StraddlePricer {
    /// Creates a pricer; `None` draws a seed from entropy.
    pub fn new(params: SimulationParameters, seed: Option<u64>) -> Self {
        Self {
            params,
            rng: PricerRng::from_optional_seed(seed),
        }
    }

    /// Creates a pricer driven by an existing generator.
    pub fn with_rng(params: SimulationParameters, rng: PricerRng) -> Self {
        Self { params, rng }
    }

    /// Returns the simulation parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Returns the seed of the underlying generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Rewinds the generator to its original seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.rng.seed());
    }

    /// Replaces the generator with a freshly seeded one.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = PricerRng::from_seed(seed);
    }

    /// Closed-form approximation for the bound volatility and horizon.
    ///
    /// # Errors
    ///
    /// Never fails for validated parameters; the `Result` mirrors
    /// [`straddle_price`].
    pub fn analytical(&self) -> PricingResult<f64> {
        straddle_price(self.params.volatility(), self.params.time())
    }

    /// Path-loop Monte Carlo estimate with standard error.
    ///
    /// # Errors
    ///
    /// See [`mc::straddle_price_mc`].
    pub fn price_mc(&mut self) -> PricingResult<McEstimate> {
        mc::estimate_mc(&self.params, &mut self.rng)
    }

    /// Five vectorised batch estimates.
    ///
    /// # Errors
    ///
    /// See [`mc::five_prices`].
    pub fn five_prices(&mut self) -> PricingResult<FiveBatchEstimate> {
        mc::five_prices(&self.params, &mut self.rng)
    }

    /// One simulated path with its straddle return.
    ///
    /// # Errors
    ///
    /// See [`mc::simulate_asset_path`].
    pub fn simulate_path(&mut self) -> PricingResult<PathResult> {
        mc::simulate_asset_path(self.params.volatility(), self.params.time(), &mut self.rng)
    }

    /// Table of `n_paths` simulated multiplier paths.
    ///
    /// # Errors
    ///
    /// See [`mc::simulate_price_paths`].
    pub fn simulate_paths(&mut self, n_paths: usize) -> PricingResult<PriceTable> {
        mc::simulate_price_paths(
            self.params.volatility(),
            self.params.time(),
            n_paths,
            &mut self.rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_replays_stream() {
        let params = SimulationParameters::new(0.2, 1.0, 50).unwrap();
        let mut pricer = StraddlePricer::new(params, Some(8));

        let first = pricer.price_mc().unwrap();
        let second = pricer.price_mc().unwrap();
        assert_ne!(first, second);

        pricer.reset();
        assert_eq!(pricer.price_mc().unwrap(), first);
    }

    #[test]
    fn test_reset_with_seed() {
        let params = SimulationParameters::default();
        let mut pricer = StraddlePricer::new(params, None);
        pricer.reset_with_seed(77);
        assert_eq!(pricer.seed(), 77);

        let mut other = StraddlePricer::with_rng(params, PricerRng::from_seed(77));
        assert_eq!(pricer.simulate_path().unwrap(), other.simulate_path().unwrap());
    }

    #[test]
    fn test_analytical_uses_params() {
        let params = SimulationParameters::new(0.4, 0.25, 10).unwrap();
        let pricer = StraddlePricer::new(params, Some(1));
        assert_eq!(pricer.analytical().unwrap(), straddle_price(0.4, 0.25).unwrap());
        assert_eq!(pricer.params().n_days(), 63);
    }

    #[test]
    fn test_simulate_paths_shape() {
        let params = SimulationParameters::new(0.2, 0.5, 10).unwrap();
        let mut pricer = StraddlePricer::new(params, Some(3));
        let table = pricer.simulate_paths(4).unwrap();
        assert_eq!((table.n_days(), table.n_paths()), (126, 4));
    }
}
