//! Pre-allocated return matrix for vectorised simulation.
//!
//! [`ReturnMatrix`] holds one days × paths block of daily returns in
//! day-major order: `data[day * n_paths + path]`. Drawing into it row by row
//! consumes the generator in the same order as a `(n_days, n_paths)` normal
//! array, and accumulating it in place turns the returns into cumulative
//! multiplicative price paths without a second buffer.
//!
//! # Memory Layout
//!
//! ```text
//!           path 0   path 1   ...  path n-1
//! day 0     r[0]     r[1]          r[n-1]
//! day 1     r[n]     r[n+1]        r[2n-1]
//! ...
//! ```

use crate::rng::PricerRng;
use straddle_core::types::{PricingError, PricingResult, MAX_MATRIX_ELEMENTS};

/// Reusable days × paths buffer.
///
/// Allocation happens once in [`new`](Self::new); [`fill_returns`](Self::fill_returns)
/// and [`accumulate`](Self::accumulate) work in place so the same buffer
/// serves every batch.
///
/// # Examples
///
/// ```rust
/// use straddle_pricing::mc::ReturnMatrix;
/// use straddle_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(1);
/// let mut matrix = ReturnMatrix::new(252, 4).unwrap();
/// matrix.fill_returns(&mut rng, 0.2 / 252_f64.sqrt()).unwrap();
/// matrix.accumulate();
///
/// assert_eq!(matrix.terminal_row().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct ReturnMatrix {
    data: Vec<f64>,
    n_days: usize,
    n_paths: usize,
}

impl ReturnMatrix {
    /// Allocates a zeroed `n_days × n_paths` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if either dimension is zero
    /// or the element count exceeds [`MAX_MATRIX_ELEMENTS`].
    pub fn new(n_days: usize, n_paths: usize) -> PricingResult<Self> {
        if n_days == 0 {
            return Err(PricingError::invalid("n_days", n_days, "must be at least 1"));
        }
        if n_paths == 0 {
            return Err(PricingError::invalid("n_paths", n_paths, "must be at least 1"));
        }
        let len = n_days
            .checked_mul(n_paths)
            .filter(|&len| len <= MAX_MATRIX_ELEMENTS)
            .ok_or_else(|| {
                PricingError::invalid(
                    "n_paths",
                    n_paths,
                    "days x paths matrix exceeds 100_000_000 elements",
                )
            })?;

        Ok(Self {
            data: vec![0.0; len],
            n_days,
            n_paths,
        })
    }

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

    /// Overwrites the whole matrix with IID `N(0, daily_vol)` returns, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Distribution`] if `daily_vol` is invalid.
    pub fn fill_returns(&mut self, rng: &mut PricerRng, daily_vol: f64) -> PricingResult<()> {
        rng.fill_normal_scaled(&mut self.data, 0.0, daily_vol)
    }

    /// Converts returns into cumulative products of `1 + r` down each column.
    ///
    /// After this call row `d` holds the price multiplier of every path at
    /// the end of day `d`.
    pub fn accumulate(&mut self) {
        let n = self.n_paths;
        for value in self.data[..n].iter_mut() {
            *value += 1.0;
        }
        for day in 1..self.n_days {
            let (done, rest) = self.data.split_at_mut(day * n);
            let previous = &done[(day - 1) * n..];
            for (value, &prev) in rest[..n].iter_mut().zip(previous) {
                *value = prev * (1.0 + *value);
            }
        }
    }

    /// Row `day` as a slice of length `n_paths`.
    ///
    /// # Panics
    ///
    /// Panics if `day >= n_days`.
    #[inline]
    pub fn row(&self, day: usize) -> &[f64] {
        let start = day * self.n_paths;
        &self.data[start..start + self.n_paths]
    }

    /// The last row; after [`accumulate`](Self::accumulate) these are the
    /// terminal multipliers.
    #[inline]
    pub fn terminal_row(&self) -> &[f64] {
        self.row(self.n_days - 1)
    }

    /// Mean of `|terminal − 1|` over all columns.
    ///
    /// Only meaningful after [`accumulate`](Self::accumulate).
    pub fn mean_abs_terminal_return(&self) -> f64 {
        let sum: f64 = self
            .terminal_row()
            .iter()
            .map(|&terminal| (terminal - 1.0).abs())
            .sum();
        sum / self.n_paths as f64
    }

    /// Returns total memory used by the buffer in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<f64>()
    }

    /// Consumes the matrix, returning the raw day-major data.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(ReturnMatrix::new(0, 10).is_err());
        assert!(ReturnMatrix::new(10, 0).is_err());
    }

    #[test]
    fn test_new_rejects_oversized() {
        let err = ReturnMatrix::new(10_000, 10_001).unwrap_err();
        assert_eq!(err.parameter(), Some("n_paths"));
    }

    #[test]
    fn test_memory_usage() {
        let matrix = ReturnMatrix::new(252, 100).unwrap();
        assert_eq!(matrix.memory_usage(), 252 * 100 * 8);
    }

    #[test]
    fn test_accumulate_column_products() {
        let mut matrix = ReturnMatrix::new(3, 2).unwrap();
        matrix.data.copy_from_slice(&[0.1, -0.5, 0.2, 0.0, -0.1, 1.0]);
        matrix.accumulate();

        assert_relative_eq!(matrix.row(0)[0], 1.1, epsilon = 1e-15);
        assert_relative_eq!(matrix.row(1)[0], 1.1 * 1.2, epsilon = 1e-15);
        assert_relative_eq!(matrix.row(2)[0], 1.1 * 1.2 * 0.9, epsilon = 1e-15);

        assert_eq!(matrix.row(0)[1], 0.5);
        assert_eq!(matrix.row(1)[1], 0.5);
        assert_eq!(matrix.row(2)[1], 1.0);

        assert_relative_eq!(
            matrix.mean_abs_terminal_return(),
            ((1.1 * 1.2 * 0.9 - 1.0_f64).abs() + 0.0) / 2.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_single_day() {
        let mut matrix = ReturnMatrix::new(1, 3).unwrap();
        matrix.data.copy_from_slice(&[0.1, -0.2, 0.0]);
        matrix.accumulate();
        let terminal = matrix.terminal_row();
        assert_relative_eq!(terminal[0], 1.1, epsilon = 1e-15);
        assert_relative_eq!(terminal[1], 0.8, epsilon = 1e-15);
        assert_eq!(terminal[2], 1.0);
    }

    #[test]
    fn test_fill_is_row_major_draw_order() {
        let mut rng1 = PricerRng::from_seed(17);
        let mut rng2 = PricerRng::from_seed(17);

        let mut matrix = ReturnMatrix::new(4, 3).unwrap();
        matrix.fill_returns(&mut rng1, 0.01).unwrap();

        let mut flat = vec![0.0; 12];
        rng2.fill_normal_scaled(&mut flat, 0.0, 0.01).unwrap();

        assert_eq!(matrix.row(2), &flat[6..9]);
        assert_eq!(matrix.into_inner(), flat);
    }
}
