//! Error types for statistics functions.

use thiserror::Error;

/// Invalid-argument errors raised by the statistics functions.
///
/// Every variant is synchronous and aborts the call; there is no retry or
/// partial-result path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Window is zero or exceeds the number of values.
    #[error("Invalid window {window} for {len} values")]
    InvalidWindow {
        /// Requested window size.
        window: usize,
        /// Number of values supplied.
        len: usize,
    },

    /// The input sequence is empty.
    #[error("values cannot be empty")]
    EmptyInput,

    /// The two input sequences differ in length.
    #[error("Datasets must be of equal length: {x_len} != {y_len}")]
    LengthMismatch {
        /// Length of the first sequence.
        x_len: usize,
        /// Length of the second sequence.
        y_len: usize,
    },
}
