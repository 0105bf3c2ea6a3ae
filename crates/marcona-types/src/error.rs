//! Error types for row and date parsing.

use thiserror::Error;

/// Errors raised while turning raw text rows into [`DailyBar`](crate::DailyBar) values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Date string does not form a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A price or volume field could not be parsed as a number.
    #[error("Invalid numeric field {field:?}: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// Row has fewer than the six expected fields.
    #[error("Row has {got} fields, expected 6")]
    RowLength {
        /// Number of fields actually present.
        got: usize,
    },
}
