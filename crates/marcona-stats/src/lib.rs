//! Descriptive statistics over numeric sequences.
//!
//! All functions in this crate are stateless and side-effect free; each
//! operates on one or two `&[f64]` slices:
//!
//! - [`returns`] / [`log_returns`] - period-over-period relative changes
//! - [`mean`] - arithmetic mean
//! - [`moving_average`] - simple moving average over a sliding window
//! - [`variance`] / [`std_deviation`] - population second moments
//! - [`covariance`] - sample covariance of two sequences
//!
//! Integer-valued data converts to `f64` at the caller's boundary; there is
//! no integer-element variant of these functions.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod descriptive;
mod error;
mod returns;
mod rolling;

pub use descriptive::{covariance, mean, std_deviation, variance};
pub use error::StatsError;
pub use returns::{log_returns, returns};
pub use rolling::moving_average;
