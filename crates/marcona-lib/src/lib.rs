//! Daily market data statistics and date-sliced OHLCV series.
//!
//! This is a facade crate that re-exports functionality from the marcona
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use marcona_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rows = read_rows("aapl_us_d.csv", true)?;
//!     let series = TimeSeries::from_rows(&rows)?;
//!
//!     let closes = series.closes();
//!     println!("mean close: {}", mean(&closes));
//!     println!("daily sigma: {}", std_deviation(&returns(&closes))?);
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use marcona_types::*;

// Re-export statistics
#[cfg(feature = "stats")]
pub use marcona_stats::{
    StatsError, covariance, log_returns, mean, moving_average, returns, std_deviation, variance,
};

// Re-export the series container
#[cfg(feature = "series")]
pub use marcona_series::TimeSeries;

// Re-export formatters
#[cfg(feature = "format")]
pub use marcona_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, read_rows,
};

/// Prelude module for convenient imports.
///
/// ```
/// use marcona_lib::prelude::*;
/// ```
pub mod prelude {
    pub use marcona_types::{DailyBar, ParseError, parse_date};

    #[cfg(feature = "stats")]
    pub use marcona_stats::{
        StatsError, covariance, log_returns, mean, moving_average, returns, std_deviation,
        variance,
    };

    #[cfg(feature = "series")]
    pub use marcona_series::TimeSeries;

    #[cfg(feature = "format")]
    pub use marcona_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, read_rows};
}
