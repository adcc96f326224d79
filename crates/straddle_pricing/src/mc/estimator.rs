//! Monte Carlo straddle estimators.
//!
//! Two estimators share one model: daily returns are IID `N(0, σ/√252)`,
//! a path's terminal multiplier is `∏(1 + r)`, and the straddle pays
//! `|terminal − 1|`.
//!
//! - [`straddle_price_mc`]: loops over paths, one `n_days` scratch buffer
//! - [`five_prices`]: five independent batches over a reused
//!   `n_days × n_paths` [`ReturnMatrix`]

use tracing::{debug, trace};

use super::workspace::ReturnMatrix;
use crate::rng::PricerRng;
use straddle_core::math::stats;
use straddle_core::types::{PricingResult, SimulationParameters};

/// Number of independent batches produced by [`five_prices`].
pub const N_BATCHES: usize = 5;

/// Monte Carlo price with its sampling error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct McEstimate {
    /// Mean straddle return over all paths.
    pub price: f64,
    /// Standard error of the mean (0 for a single path).
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
}

impl McEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Estimates the straddle price by looping over `n_paths` independent paths.
///
/// Each path draws `n_days` returns from `rng` in order, so with one path
/// the result equals the straddle return of
/// [`simulate_asset_path`](super::simulate_asset_path) under the same seed.
///
/// # Errors
///
/// Returns [`PricingError::Distribution`](straddle_core::PricingError::Distribution)
/// if the return distribution cannot be built.
///
/// # Examples
///
/// ```rust
/// use straddle_core::SimulationParameters;
/// use straddle_pricing::mc::straddle_price_mc;
/// use straddle_pricing::rng::PricerRng;
///
/// let params = SimulationParameters::default();
/// let mut rng = PricerRng::from_seed(42);
/// let price = straddle_price_mc(&params, &mut rng).unwrap();
/// assert!(price > 0.0 && price < 0.5);
/// ```
pub fn straddle_price_mc(params: &SimulationParameters, rng: &mut PricerRng) -> PricingResult<f64> {
    estimate_mc(params, rng).map(|estimate| estimate.price)
}

/// Loop-form estimator returning the price with its standard error.
///
/// # Errors
///
/// See [`straddle_price_mc`].
pub fn estimate_mc(params: &SimulationParameters, rng: &mut PricerRng) -> PricingResult<McEstimate> {
    let n_paths = params.n_paths();
    let daily_vol = params.daily_volatility();
    debug!(
        volatility = params.volatility(),
        time = params.time(),
        n_days = params.n_days(),
        n_paths,
        seed = rng.seed(),
        "pricing straddle by path loop"
    );

    let mut returns = vec![0.0; params.n_days()];
    let mut result_sum = 0.0;
    let mut result_sum_sq = 0.0;

    for _ in 0..n_paths {
        rng.fill_normal_scaled(&mut returns, 0.0, daily_vol)?;
        let terminal = returns.iter().fold(1.0, |acc, &r| acc * (1.0 + r));
        let straddle_return = (terminal - 1.0).abs();
        result_sum += straddle_return;
        result_sum_sq += straddle_return * straddle_return;
    }

    let n = n_paths as f64;
    let price = result_sum / n;
    let std_error = if n_paths > 1 {
        let variance = ((result_sum_sq - n * price * price) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    } else {
        0.0
    };

    Ok(McEstimate {
        price,
        std_error,
        n_paths,
    })
}

/// Five independent batch estimates, in generation order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FiveBatchEstimate {
    prices: [f64; N_BATCHES],
    paths_per_batch: usize,
}

impl FiveBatchEstimate {
    /// The batch prices in generation order.
    #[inline]
    pub fn prices(&self) -> &[f64; N_BATCHES] {
        &self.prices
    }

    /// Paths simulated in each batch.
    #[inline]
    pub fn paths_per_batch(&self) -> usize {
        self.paths_per_batch
    }

    /// Mean of the five batch prices.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.prices).unwrap_or(0.0)
    }

    /// Sample standard deviation across the five batches.
    pub fn sample_std_dev(&self) -> f64 {
        stats::sample_std_dev(&self.prices).unwrap_or(0.0)
    }

    /// Standard error of the five-batch mean, `s / √5`.
    pub fn standard_error(&self) -> f64 {
        stats::standard_error(&self.prices).unwrap_or(0.0)
    }

    /// Converts into a plain vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.prices.to_vec()
    }
}

/// Five independent straddle estimates over `n_paths` paths each.
///
/// Each batch fills one `n_days × n_paths` matrix of daily returns, takes
/// the column-wise cumulative product and averages `|terminal − 1|` over
/// columns. The matrix is allocated once and reused by every batch.
///
/// Repeating the computation lets a caller observe the spread of the
/// estimate shrinking as `n_paths` grows.
///
/// The batch size is `params.n_paths()`. The usual batch size is
/// [`DEFAULT_BATCH_PATHS`](straddle_core::types::DEFAULT_BATCH_PATHS), available as
/// [`SimulationParameters::five_batch_default`]; `SimulationParameters::default()`
/// carries the loop estimator's 100 paths instead.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`](straddle_core::PricingError::InvalidParameter)
/// if the matrix would exceed the element limit, or a distribution error.
///
/// # Examples
///
/// ```rust
/// use straddle_core::SimulationParameters;
/// use straddle_pricing::mc::five_prices;
/// use straddle_pricing::rng::PricerRng;
///
/// let params = SimulationParameters::new(0.2, 1.0, 2_000).unwrap();
/// let mut rng = PricerRng::from_seed(7);
/// let estimate = five_prices(&params, &mut rng).unwrap();
///
/// assert_eq!(estimate.prices().len(), 5);
/// assert_eq!(estimate.paths_per_batch(), 2_000);
/// ```
pub fn five_prices(
    params: &SimulationParameters,
    rng: &mut PricerRng,
) -> PricingResult<FiveBatchEstimate> {
    params.matrix_len()?;
    let daily_vol = params.daily_volatility();
    debug!(
        volatility = params.volatility(),
        time = params.time(),
        n_days = params.n_days(),
        mc_paths = params.n_paths(),
        seed = rng.seed(),
        "pricing straddle in five vectorised batches"
    );

    let mut matrix = ReturnMatrix::new(params.n_days(), params.n_paths())?;
    debug!(bytes = matrix.memory_usage(), "return matrix allocated");
    let mut prices = [0.0; N_BATCHES];

    for (batch, price) in prices.iter_mut().enumerate() {
        matrix.fill_returns(rng, daily_vol)?;
        matrix.accumulate();
        *price = matrix.mean_abs_terminal_return();
        trace!(batch, price = *price, "batch complete");
    }

    Ok(FiveBatchEstimate {
        prices,
        paths_per_batch: params.n_paths(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::straddle_price;
    use approx::assert_relative_eq;

    fn params(vol: f64, time: f64, n_paths: usize) -> SimulationParameters {
        SimulationParameters::new(vol, time, n_paths).unwrap()
    }

    #[test]
    fn test_zero_volatility_prices_zero() {
        let mut rng = PricerRng::from_seed(1);
        let p = params(0.0, 1.0, 50);
        assert_eq!(straddle_price_mc(&p, &mut rng).unwrap(), 0.0);

        let five = five_prices(&p, &mut rng).unwrap();
        assert!(five.prices().iter().all(|&price| price == 0.0));
    }

    #[test]
    fn test_reproducible_with_seed() {
        let p = params(0.2, 1.0, 200);
        let a = straddle_price_mc(&p, &mut PricerRng::from_seed(123)).unwrap();
        let b = straddle_price_mc(&p, &mut PricerRng::from_seed(123)).unwrap();
        assert_eq!(a, b);

        let a = five_prices(&p, &mut PricerRng::from_seed(321)).unwrap();
        let b = five_prices(&p, &mut PricerRng::from_seed(321)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_path_has_no_std_error() {
        let estimate = estimate_mc(&params(0.2, 1.0, 1), &mut PricerRng::from_seed(9)).unwrap();
        assert_eq!(estimate.n_paths, 1);
        assert_eq!(estimate.std_error, 0.0);
        assert!(estimate.price > 0.0);
    }

    #[test]
    fn test_loop_estimate_near_analytical() {
        let p = params(0.2, 1.0, 20_000);
        let estimate = estimate_mc(&p, &mut PricerRng::from_seed(42)).unwrap();
        let analytical = straddle_price(0.2, 1.0).unwrap();

        // Compounding adds a small convexity bias on top of sampling noise
        let tolerance = 4.0 * estimate.std_error + 0.005;
        assert!(
            (estimate.price - analytical).abs() < tolerance,
            "MC={:.5} analytical={:.5} tol={:.5}",
            estimate.price,
            analytical,
            tolerance
        );
    }

    #[test]
    fn test_std_error_scales_with_paths() {
        let small = estimate_mc(&params(0.2, 1.0, 1_000), &mut PricerRng::from_seed(5)).unwrap();
        let large = estimate_mc(&params(0.2, 1.0, 16_000), &mut PricerRng::from_seed(6)).unwrap();
        // Ratio is √16 = 4 in expectation
        assert_relative_eq!(small.std_error / large.std_error, 4.0, max_relative = 0.2);
    }

    #[test]
    fn test_confidence_widths() {
        let estimate = McEstimate {
            price: 0.16,
            std_error: 0.01,
            n_paths: 100,
        };
        assert_relative_eq!(estimate.confidence_95(), 0.0196, epsilon = 1e-12);
        assert_relative_eq!(estimate.confidence_99(), 0.02576, epsilon = 1e-12);
    }

    #[test]
    fn test_five_prices_shape_and_summary() {
        let p = params(0.2, 0.5, 500);
        let estimate = five_prices(&p, &mut PricerRng::from_seed(77)).unwrap();

        assert_eq!(estimate.to_vec().len(), N_BATCHES);
        assert_eq!(estimate.paths_per_batch(), 500);
        assert!(estimate.prices().iter().all(|&price| price > 0.0));
        assert!(estimate.sample_std_dev() > 0.0);

        let mean = estimate.prices().iter().sum::<f64>() / 5.0;
        assert_relative_eq!(estimate.mean(), mean, epsilon = 1e-15);
        assert_relative_eq!(
            estimate.standard_error(),
            estimate.sample_std_dev() / 5f64.sqrt(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_five_prices_batches_are_independent() {
        let p = params(0.2, 1.0, 100);
        let estimate = five_prices(&p, &mut PricerRng::from_seed(2)).unwrap();
        let prices = estimate.prices();
        for i in 0..N_BATCHES {
            for j in (i + 1)..N_BATCHES {
                assert_ne!(prices[i], prices[j]);
            }
        }
    }

    #[test]
    fn test_five_prices_rejects_oversized_matrix() {
        let p = params(0.2, 1.0, 1_000_000);
        let err = five_prices(&p, &mut PricerRng::from_seed(1)).unwrap_err();
        assert_eq!(err.parameter(), Some("n_paths"));
    }
}
