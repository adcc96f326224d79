//! Sample statistics over slices of estimates.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support
//! and return `None` when the sample is too small for the statistic.

use num_traits::Float;

/// Arithmetic mean of `values`.
///
/// # Returns
/// `None` for an empty slice.
///
/// # Examples
/// ```
/// use straddle_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
#[inline]
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Sample variance of `values` (n − 1 denominator).
///
/// # Returns
/// `None` for fewer than two values.
#[inline]
pub fn sample_variance<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let dof = T::from(values.len() - 1)?;
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    Some(sum_sq / dof)
}

/// Sample standard deviation of `values` (n − 1 denominator).
///
/// # Returns
/// `None` for fewer than two values.
///
/// # Examples
/// ```
/// use straddle_core::math::stats::sample_std_dev;
///
/// let sd = sample_std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.138089935299395).abs() < 1e-12);
/// assert_eq!(sample_std_dev(&[1.0_f64]), None);
/// ```
#[inline]
pub fn sample_std_dev<T: Float>(values: &[T]) -> Option<T> {
    sample_variance(values).map(T::sqrt)
}

/// Standard error of the mean, `s / √n`.
///
/// # Returns
/// `None` for fewer than two values.
#[inline]
pub fn standard_error<T: Float>(values: &[T]) -> Option<T> {
    let sd = sample_std_dev(values)?;
    let n = T::from(values.len())?;
    Some(sd / n.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[5.0_f64]), Some(5.0));
        assert_relative_eq!(mean(&[0.1_f64, 0.2, 0.3]).unwrap(), 0.2, epsilon = 1e-15);
        assert_eq!(mean(&[1.0_f32, 3.0]), Some(2.0_f32));
    }

    #[test]
    fn test_sample_variance_constant() {
        assert_eq!(sample_variance(&[3.0_f64; 5]), Some(0.0));
    }

    #[test]
    fn test_sample_std_dev_too_small() {
        assert_eq!(sample_std_dev::<f64>(&[]), None);
        assert_eq!(sample_std_dev(&[1.0_f64]), None);
    }

    #[test]
    fn test_sample_std_dev_two_points() {
        // Two points a, b: s = |a - b| / √2
        let sd = sample_std_dev(&[1.0_f64, 3.0]).unwrap();
        assert_relative_eq!(sd, 2.0 / 2f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_standard_error() {
        let values = [1.0_f64, 2.0, 3.0, 4.0];
        let se = standard_error(&values).unwrap();
        let sd = sample_std_dev(&values).unwrap();
        assert_relative_eq!(se, sd / 2.0, epsilon = 1e-15);
    }
}
