//! Daily OHLCV bar representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// One trading day's OHLCV record.
///
/// No relationship between the price fields is enforced; construction
/// accepts any values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Calendar date of the trading day (no time-of-day component).
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price during the day.
    pub high: f64,
    /// Lowest price during the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl DailyBar {
    /// Creates a new daily bar.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Builds a bar from a raw text row of the form
    /// `[date, open, high, low, close, volume]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the row has fewer than six fields, the date is
    /// not a valid `YYYY-MM-DD` string, or a numeric field fails to parse.
    pub fn from_row(row: &[String]) -> Result<Self, ParseError> {
        if row.len() < 6 {
            return Err(ParseError::RowLength { got: row.len() });
        }

        Ok(Self {
            date: parse_date(&row[0])?,
            open: parse_field("open", &row[1])?,
            high: parse_field("high", &row[2])?,
            low: parse_field("low", &row[3])?,
            close: parse_field("close", &row[4])?,
            volume: parse_field("volume", &row[5])?,
        })
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Parses a `YYYY-MM-DD` date string at fixed character offsets.
///
/// Year is read from characters 0..4, month from 5..7, day from 8..10; the
/// separators themselves are never inspected. Strings with the right widths
/// but other separators therefore parse as well.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] if the string is too short, a
/// component is not numeric, or the components do not name a real calendar
/// date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate(s.to_string());

    let year: i32 = s.get(0..4).and_then(|y| y.parse().ok()).ok_or_else(invalid)?;
    let month: u32 = s.get(5..7).and_then(|m| m.parse().ok()).ok_or_else(invalid)?;
    let day: u32 = s.get(8..10).and_then(|d| d.parse().ok()).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
