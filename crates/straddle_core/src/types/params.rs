//! Monte Carlo simulation parameters.
//!
//! [`SimulationParameters`] bundles the annualised volatility, the horizon in
//! years and the number of simulated paths. It is immutable once built; use
//! [`SimulationParametersBuilder`] to construct validated instances.

use super::error::{ensure_non_negative, ensure_positive, PricingError, PricingResult};

/// Trading days per year used to de-annualise volatility and size paths.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of simulated days per path.
pub const MAX_DAYS: usize = 10_000;

/// Maximum element count of a days × paths return matrix.
pub const MAX_MATRIX_ELEMENTS: usize = 100_000_000;

const DEFAULT_VOLATILITY: f64 = 0.2;
const DEFAULT_TIME: f64 = 1.0;
/// Default path count for the loop estimator.
pub const DEFAULT_PATHS: usize = 100;

/// Default paths per batch for the five-batch estimator.
pub const DEFAULT_BATCH_PATHS: usize = 10_000;

/// Number of whole trading days in `time` years: `floor(time * 252)`.
///
/// # Examples
///
/// ```rust
/// use straddle_core::types::n_days_for;
///
/// assert_eq!(n_days_for(1.0), 252);
/// assert_eq!(n_days_for(0.5), 126);
/// assert_eq!(n_days_for(0.001), 0);
/// ```
#[inline]
pub fn n_days_for(time: f64) -> usize {
    (time * TRADING_DAYS_PER_YEAR as f64).floor() as usize
}

/// Validated inputs shared by every Monte Carlo estimator.
///
/// # Invariants
///
/// - `volatility` is finite and non-negative
/// - `time` is finite, positive and spans at least one trading day
/// - `n_paths` is in `[1, MAX_PATHS]`
/// - `n_days()` is in `[1, MAX_DAYS]`
///
/// # Examples
///
/// ```rust
/// use straddle_core::types::SimulationParameters;
///
/// let params = SimulationParameters::default();
/// assert_eq!(params.volatility(), 0.2);
/// assert_eq!(params.time(), 1.0);
/// assert_eq!(params.n_paths(), 100);
/// assert_eq!(params.n_days(), 252);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParameters {
    /// Annualised volatility (σ).
    volatility: f64,
    /// Horizon in years (t).
    time: f64,
    /// Number of simulated paths.
    n_paths: usize,
    /// Cached `floor(time * 252)`.
    n_days: usize,
}

impl SimulationParameters {
    /// Validates and creates parameters in one call.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if any invariant is violated.
    pub fn new(volatility: f64, time: f64, n_paths: usize) -> PricingResult<Self> {
        Self::builder()
            .volatility(volatility)
            .time(time)
            .n_paths(n_paths)
            .build()
    }

    /// Creates a new builder seeded with the defaults (σ = 0.2, t = 1, 100 paths).
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the horizon in years.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of simulated trading days, `floor(time * 252)`.
    #[inline]
    pub fn n_days(&self) -> usize {
        self.n_days
    }

    /// Returns the daily volatility, `σ / √252`.
    #[inline]
    pub fn daily_volatility(&self) -> f64 {
        self.volatility / (TRADING_DAYS_PER_YEAR as f64).sqrt()
    }

    /// Default parameters with [`DEFAULT_BATCH_PATHS`] paths, the batch size
    /// the five-batch estimator is normally run with.
    ///
    /// [`Default`] carries [`DEFAULT_PATHS`], the loop estimator's count.
    pub fn five_batch_default() -> Self {
        Self {
            n_paths: DEFAULT_BATCH_PATHS,
            ..Self::default()
        }
    }

    /// Returns a copy with a different path count.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if `n_paths` is out of range.
    pub fn with_n_paths(&self, n_paths: usize) -> PricingResult<Self> {
        validate_path_count(n_paths)?;
        Ok(Self { n_paths, ..*self })
    }

    /// Returns `n_days × n_paths`, the size of a full return matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if the matrix would exceed
    /// [`MAX_MATRIX_ELEMENTS`].
    pub fn matrix_len(&self) -> PricingResult<usize> {
        let len = self.n_days * self.n_paths;
        if len > MAX_MATRIX_ELEMENTS {
            return Err(PricingError::invalid(
                "n_paths",
                self.n_paths,
                "days x paths matrix exceeds 100_000_000 elements",
            ));
        }
        Ok(len)
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            volatility: DEFAULT_VOLATILITY,
            time: DEFAULT_TIME,
            n_paths: DEFAULT_PATHS,
            n_days: n_days_for(DEFAULT_TIME),
        }
    }
}

fn validate_path_count(n_paths: usize) -> PricingResult<()> {
    if n_paths == 0 {
        return Err(PricingError::invalid("n_paths", n_paths, "must be at least 1"));
    }
    if n_paths > MAX_PATHS {
        return Err(PricingError::invalid(
            "n_paths",
            n_paths,
            "must not exceed 10_000_000",
        ));
    }
    Ok(())
}

/// Validates a horizon and returns its trading day count.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] naming `time` if it is not
/// finite and positive, covers no whole trading day, or exceeds [`MAX_DAYS`].
pub fn validate_horizon(time: f64) -> PricingResult<usize> {
    ensure_positive("time", time)?;
    let n_days = n_days_for(time);
    if n_days == 0 {
        return Err(PricingError::invalid(
            "time",
            time,
            "must cover at least one trading day (>= 1/252)",
        ));
    }
    if n_days > MAX_DAYS {
        return Err(PricingError::invalid(
            "time",
            time,
            "must not exceed 10_000 trading days",
        ));
    }
    Ok(n_days)
}

/// Builder for [`SimulationParameters`].
///
/// Unset fields fall back to the defaults; everything is validated in
/// [`build`](Self::build).
///
/// # Examples
///
/// ```rust
/// use straddle_core::types::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .volatility(0.35)
///     .n_paths(10_000)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.time(), 1.0);
/// assert_eq!(params.n_paths(), 10_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    volatility: Option<f64>,
    time: Option<f64>,
    n_paths: Option<usize>,
}

impl SimulationParametersBuilder {
    /// Sets the annualised volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the horizon in years.
    #[inline]
    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the number of simulated paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if:
    /// - `volatility` is negative or not finite
    /// - `time` is not positive, not finite, or shorter than one trading day
    /// - `n_paths` is 0 or greater than 10,000,000
    pub fn build(self) -> PricingResult<SimulationParameters> {
        let volatility =
            ensure_non_negative("volatility", self.volatility.unwrap_or(DEFAULT_VOLATILITY))?;
        let time = self.time.unwrap_or(DEFAULT_TIME);
        let n_days = validate_horizon(time)?;
        let n_paths = self.n_paths.unwrap_or(DEFAULT_PATHS);
        validate_path_count(n_paths)?;

        Ok(SimulationParameters {
            volatility,
            time,
            n_paths,
            n_days,
        })
    }
}
