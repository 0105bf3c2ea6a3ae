//! Mean, variance, standard deviation and covariance.

use crate::StatsError;

/// Returns the arithmetic mean of `values`, or `0.0` for an empty slice.
///
/// The empty-input result is a policy choice, not a mathematical one: the
/// mean of an empty set is undefined, and this function deliberately maps
/// it to zero instead of failing.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population variance of `values` (divides by `n`).
///
/// Unlike [`mean`], an empty input is an error rather than zero.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
pub fn variance(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mean = mean(values);
    let sum_of_squared_diff: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();

    Ok(sum_of_squared_diff / values.len() as f64)
}

/// Computes the population standard deviation of `values`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `values` is empty.
pub fn std_deviation(values: &[f64]) -> Result<f64, StatsError> {
    Ok(variance(values)?.sqrt())
}

/// Computes the sample covariance of two sequences (divides by `n - 1`).
///
/// Positive when the sequences move together, negative when they move
/// against each other. Two elements per sequence is the useful minimum: a
/// single-element pair divides zero by zero and yields NaN rather than an
/// error.
///
/// # Errors
///
/// Returns [`StatsError::LengthMismatch`] if the sequences differ in length.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let x_mean = mean(x);
    let y_mean = mean(y);

    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - x_mean) * (b - y_mean))
        .sum();

    Ok(sum / (x.len() as f64 - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_mean_constant() {
        assert_relative_eq!(mean(&[2.0, 2.0]), 2.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_relative_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_variance_basic() {
        let result = variance(&[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(result, 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_variance_constant() {
        assert_relative_eq!(variance(&[5.0, 5.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_std_deviation_basic() {
        let result = std_deviation(&[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(result, (2.0f64 / 3.0).sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_std_deviation_matches_variance() {
        let values = [3.0, 7.0, 7.0, 19.0];
        let result = std_deviation(&values).unwrap();
        assert_relative_eq!(result, variance(&values).unwrap().sqrt());
    }

    #[test]
    fn test_std_deviation_empty() {
        assert_eq!(std_deviation(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_covariance_basic() {
        let result = covariance(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert_relative_eq!(result, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_covariance_size_mismatch() {
        assert_eq!(
            covariance(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { x_len: 2, y_len: 1 })
        );
    }

    #[test]
    fn test_covariance_single_element_is_nan() {
        // 0/0 from the n-1 divisor; propagated, not trapped.
        assert!(covariance(&[1.0], &[1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_covariance_against_population_variance() {
        // cov(x, x) scales population variance by n/(n-1).
        let x = [1.0, 4.0, 9.0, 16.0, 25.0];
        let n = x.len() as f64;
        let result = covariance(&x, &x).unwrap();
        assert_relative_eq!(
            result,
            variance(&x).unwrap() * n / (n - 1.0),
            epsilon = 1e-9
        );
    }
}
