//! Simple moving average.

use crate::StatsError;

/// Computes a simple moving average over a sliding window.
///
/// Produces `values.len() - window + 1` elements; element `i` is the mean
/// of `values[i..i + window]`. The sum is carried forward (add the entering
/// element, subtract the leaving one), so the whole pass is O(n) regardless
/// of window size. A window equal to the sequence length is valid and
/// yields exactly one value.
///
/// # Errors
///
/// Returns [`StatsError::InvalidWindow`] when `window` is zero, `values` is
/// empty, or `values.len() < window`.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, StatsError> {
    if window == 0 || values.len() < window {
        return Err(StatsError::InvalidWindow {
            window,
            len: values.len(),
        });
    }

    let mut rolling_mean = Vec::with_capacity(values.len() - window + 1);

    let mut sum: f64 = values[..window].iter().sum();
    rolling_mean.push(sum / window as f64);

    for i in window..values.len() {
        sum += values[i] - values[i - window];
        rolling_mean.push(sum / window as f64);
    }

    Ok(rolling_mean)
}
