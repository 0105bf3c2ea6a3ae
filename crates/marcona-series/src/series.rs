//! Append-only container of daily bars with date-range slicing.

use chrono::{NaiveDate, TimeDelta};
use marcona_types::{DailyBar, ParseError};

/// An ordered sequence of daily bars.
///
/// Bars are stored by value in insertion order; the container never sorts.
/// Range queries run a single linear scan with a date predicate, so they
/// return a contiguous stretch of the series only when bars were supplied
/// in non-decreasing date order. Keeping that order is the caller's
/// responsibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    bars: Vec<DailyBar>,
}

impl TimeSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self { bars: Vec::new() }
    }

    /// Builds a series from raw text rows of the form
    /// `[date, open, high, low, close, volume]`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial series is
    /// produced.
    pub fn from_rows<R: AsRef<[String]>>(rows: &[R]) -> Result<Self, ParseError> {
        rows.iter()
            .map(|row| DailyBar::from_row(row.as_ref()))
            .collect()
    }

    /// Appends a bar to the end of the series.
    pub fn push(&mut self, bar: DailyBar) {
        self.bars.push(bar);
    }

    /// Returns the number of bars in the series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series holds no bars.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns the bars as a slice, in storage order.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Returns a read-only iterator over the bars in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyBar> {
        self.bars.iter()
    }

    /// Extracts one numeric field from every bar, in storage order.
    ///
    /// The projection decides which field:
    ///
    /// ```
    /// # use marcona_series::TimeSeries;
    /// # let series = TimeSeries::new();
    /// let volumes = series.extract(|bar| bar.volume);
    /// ```
    pub fn extract<F>(&self, field: F) -> Vec<f64>
    where
        F: FnMut(&DailyBar) -> f64,
    {
        self.bars.iter().map(field).collect()
    }

    /// Returns the closing price of every bar, in storage order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.extract(|bar| bar.close)
    }

    /// Returns copies of the bars dated strictly between `start` and `end`.
    ///
    /// Both endpoints are excluded. Matches come back in storage order from
    /// one linear scan; sortedness is neither required nor checked, but only
    /// a date-ordered series yields a contiguous range.
    #[must_use]
    pub fn slice(&self, start: NaiveDate, end: NaiveDate) -> Vec<DailyBar> {
        self.bars
            .iter()
            .filter(|bar| bar.date > start && bar.date < end)
            .copied()
            .collect()
    }

    /// Returns copies of the bars dated strictly between `start` and
    /// `start + duration`.
    ///
    /// Calendar-day arithmetic; delegates to [`slice`](Self::slice), so both
    /// endpoints are excluded.
    #[must_use]
    pub fn slice_for(&self, start: NaiveDate, duration: TimeDelta) -> Vec<DailyBar> {
        self.slice(start, start + duration)
    }
}

impl FromIterator<DailyBar> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = DailyBar>>(iter: I) -> Self {
        Self {
            bars: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a DailyBar;
    type IntoIter = std::slice::Iter<'a, DailyBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

impl Extend<DailyBar> for TimeSeries {
    fn extend<I: IntoIterator<Item = DailyBar>>(&mut self, iter: I) {
        self.bars.extend(iter);
    }
}
