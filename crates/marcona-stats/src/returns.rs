//! Period-over-period returns.

/// Calculates percentage returns over successive values.
///
/// The result holds one element fewer than the input; element `i` is
/// `values[i+1] / values[i] - 1`. Positive values mean the price increased,
/// negative values mean it decreased. Fewer than two inputs yield an empty
/// vector, not an error. A zero predecessor divides through and propagates
/// as a non-finite value.
#[must_use]
pub fn returns(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }

    values.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Calculates logarithmic returns over successive values.
///
/// Element `i` is `ln(values[i+1] / values[i])`. Same empty-input policy as
/// [`returns`]; a non-positive ratio produces NaN or negative infinity
/// rather than an error.
#[must_use]
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }

    values.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}
