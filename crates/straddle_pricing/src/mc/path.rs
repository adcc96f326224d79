//! Simulated price paths.
//!
//! [`simulate_asset_path`] produces one path together with its straddle
//! return; [`simulate_price_paths`] produces a days × paths table of
//! cumulative multipliers for charting.

use tracing::debug;

use super::workspace::ReturnMatrix;
use crate::rng::PricerRng;
use straddle_core::types::{
    error::ensure_non_negative, validate_horizon, PricingError, PricingResult,
    TRADING_DAYS_PER_YEAR,
};

/// One simulated path.
///
/// # Invariants
///
/// - `factors()` and `prices()` have length `n_days = floor(t · 252)`
/// - `prices()[0] == factors()[0]`
/// - `straddle_return() == |prices().last() − 1|`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult {
    factors: Vec<f64>,
    prices: Vec<f64>,
    straddle_return: f64,
}

impl PathResult {
    /// Builds a path from daily returns.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `returns` is empty.
    pub fn from_returns(returns: &[f64]) -> PricingResult<Self> {
        if returns.is_empty() {
            return Err(PricingError::invalid("n_days", 0, "must be at least 1"));
        }

        let factors: Vec<f64> = returns.iter().map(|&r| 1.0 + r).collect();
        let prices: Vec<f64> = factors
            .iter()
            .scan(1.0, |acc, &factor| {
                *acc *= factor;
                Some(*acc)
            })
            .collect();
        let terminal = prices.last().copied().unwrap_or(1.0);

        Ok(Self {
            factors,
            prices,
            straddle_return: (terminal - 1.0).abs(),
        })
    }

    /// Per-day multiplicative factors `1 + r`.
    #[inline]
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }

    /// Cumulative product of the factors.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// `|final price − 1|`.
    #[inline]
    pub fn straddle_return(&self) -> f64 {
        self.straddle_return
    }

    /// Number of simulated days.
    #[inline]
    pub fn n_days(&self) -> usize {
        self.prices.len()
    }

    /// Final price multiplier.
    #[inline]
    pub fn terminal_price(&self) -> f64 {
        self.prices.last().copied().unwrap_or(1.0)
    }

    /// Iterates `(day, factor, price)` rows, first `n` days only.
    pub fn head(&self, n: usize) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.factors
            .iter()
            .zip(&self.prices)
            .take(n)
            .enumerate()
            .map(|(day, (&factor, &price))| (day, factor, price))
    }
}

/// Simulates one path of `floor(time · 252)` daily returns.
///
/// Draws the returns exactly as one iteration of
/// [`straddle_price_mc`](super::straddle_price_mc) does.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] for a negative or non-finite
/// volatility, or a horizon shorter than one trading day.
///
/// # Examples
///
/// ```rust
/// use straddle_pricing::mc::simulate_asset_path;
/// use straddle_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let path = simulate_asset_path(0.2, 1.0, &mut rng).unwrap();
///
/// assert_eq!(path.prices().len(), 252);
/// assert_eq!(path.prices()[0], path.factors()[0]);
/// assert_eq!((path.terminal_price() - 1.0).abs(), path.straddle_return());
/// ```
pub fn simulate_asset_path(
    volatility: f64,
    time: f64,
    rng: &mut PricerRng,
) -> PricingResult<PathResult> {
    let volatility = ensure_non_negative("volatility", volatility)?;
    let n_days = validate_horizon(time)?;
    let daily_vol = volatility / (TRADING_DAYS_PER_YEAR as f64).sqrt();
    debug!(volatility, time, n_days, seed = rng.seed(), "simulating single path");

    let mut returns = vec![0.0; n_days];
    rng.fill_normal_scaled(&mut returns, 0.0, daily_vol)?;
    PathResult::from_returns(&returns)
}

/// Days × paths table of cumulative price multipliers.
///
/// Stored day-major; this is the shape handed to an external plotting
/// surface, one line series per column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceTable {
    data: Vec<f64>,
    n_days: usize,
    n_paths: usize,
}

impl PriceTable {
    /// Number of rows (days).
    #[inline]
    pub fn n_days(&self) -> usize {
        self.n_days
    }

    /// Number of columns (paths).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Multipliers of every path at the end of `day`.
    ///
    /// # Panics
    ///
    /// Panics if `day >= n_days`.
    #[inline]
    pub fn row(&self, day: usize) -> &[f64] {
        let start = day * self.n_paths;
        &self.data[start..start + self.n_paths]
    }

    /// Iterates rows in day order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_paths)
    }

    /// One path's series over all days.
    ///
    /// # Panics
    ///
    /// Panics if `path >= n_paths`.
    pub fn column(&self, path: usize) -> Vec<f64> {
        assert!(path < self.n_paths, "path index out of range");
        self.rows().map(|row| row[path]).collect()
    }

    /// Final multipliers, one per path.
    #[inline]
    pub fn terminal_row(&self) -> &[f64] {
        self.row(self.n_days - 1)
    }
}

impl From<ReturnMatrix> for PriceTable {
    fn from(matrix: ReturnMatrix) -> Self {
        let n_days = matrix.n_days();
        let n_paths = matrix.n_paths();
        Self {
            data: matrix.into_inner(),
            n_days,
            n_paths,
        }
    }
}

/// Simulates `n_paths` paths and returns their cumulative multipliers.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] for invalid volatility,
/// horizon, zero paths, or a table beyond the element limit.
///
/// # Examples
///
/// ```rust
/// use straddle_pricing::mc::simulate_price_paths;
/// use straddle_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let table = simulate_price_paths(0.2, 1.0, 4, &mut rng).unwrap();
///
/// assert_eq!(table.n_days(), 252);
/// assert_eq!(table.n_paths(), 4);
/// ```
pub fn simulate_price_paths(
    volatility: f64,
    time: f64,
    n_paths: usize,
    rng: &mut PricerRng,
) -> PricingResult<PriceTable> {
    let volatility = ensure_non_negative("volatility", volatility)?;
    let n_days = validate_horizon(time)?;
    let daily_vol = volatility / (TRADING_DAYS_PER_YEAR as f64).sqrt();
    debug!(volatility, time, n_days, n_paths, seed = rng.seed(), "simulating price table");

    let mut matrix = ReturnMatrix::new(n_days, n_paths)?;
    matrix.fill_returns(rng, daily_vol)?;
    matrix.accumulate();
    Ok(matrix.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_returns_invariants() {
        let path = PathResult::from_returns(&[0.1, -0.2, 0.05]).unwrap();

        assert_eq!(path.n_days(), 3);
        assert_eq!(path.prices()[0], path.factors()[0]);
        assert_relative_eq!(path.terminal_price(), 1.1 * 0.8 * 1.05, epsilon = 1e-15);
        assert_eq!(path.straddle_return(), (path.terminal_price() - 1.0).abs());
    }

    #[test]
    fn test_from_returns_empty() {
        assert!(PathResult::from_returns(&[]).is_err());
    }

    #[test]
    fn test_head() {
        let path = PathResult::from_returns(&[0.1, 0.1, 0.1]).unwrap();
        let rows: Vec<_> = path.head(2).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 0);
        assert_eq!(rows[1].2, path.prices()[1]);

        assert_eq!(path.head(10).count(), 3);
    }

    #[test]
    fn test_half_year_length() {
        let path = simulate_asset_path(0.3, 0.5, &mut PricerRng::from_seed(4)).unwrap();
        assert_eq!(path.n_days(), 126);
        assert_eq!(path.factors().len(), 126);
    }

    #[test]
    fn test_simulate_asset_path_validation() {
        let mut rng = PricerRng::from_seed(1);
        assert_eq!(
            simulate_asset_path(-0.2, 1.0, &mut rng).unwrap_err().parameter(),
            Some("volatility")
        );
        assert_eq!(
            simulate_asset_path(0.2, 0.0, &mut rng).unwrap_err().parameter(),
            Some("time")
        );
    }

    #[test]
    fn test_table_columns_are_running_products() {
        let mut rng = PricerRng::from_seed(10);
        let table = simulate_price_paths(0.25, 0.25, 3, &mut rng).unwrap();
        assert_eq!(table.n_days(), 63);
        assert_eq!(table.rows().count(), 63);

        // Rebuild the returns from the same seed and compare column 1
        let mut replay = PricerRng::from_seed(10);
        let mut returns = vec![0.0; 63 * 3];
        replay
            .fill_normal_scaled(&mut returns, 0.0, 0.25 / 252f64.sqrt())
            .unwrap();

        let mut expected = 1.0;
        for (day, value) in table.column(1).iter().enumerate() {
            expected *= 1.0 + returns[day * 3 + 1];
            assert_relative_eq!(*value, expected, epsilon = 1e-14);
        }
        assert_eq!(table.terminal_row(), table.row(62));
    }

    #[test]
    fn test_table_zero_paths() {
        let mut rng = PricerRng::from_seed(1);
        assert!(simulate_price_paths(0.2, 1.0, 0, &mut rng).is_err());
    }

    #[test]
    #[should_panic(expected = "path index out of range")]
    fn test_column_out_of_range() {
        let mut rng = PricerRng::from_seed(1);
        let table = simulate_price_paths(0.2, 1.0, 2, &mut rng).unwrap();
        let _ = table.column(2);
    }
}
