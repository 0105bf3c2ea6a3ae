//! Date-sliceable OHLCV time series container.
//!
//! [`TimeSeries`] accumulates [`DailyBar`](marcona_types::DailyBar) records
//! in insertion order and answers date-range queries over them.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod series;

pub use series::TimeSeries;
