//! Core types for marcona daily market data statistics.
//!
//! This crate provides the fundamental data structures used throughout
//! marcona:
//!
//! - [`DailyBar`] - One trading day's open/high/low/close/volume record
//! - [`parse_date`] - Fixed-offset `YYYY-MM-DD` date parsing
//! - [`ParseError`] - Errors raised while turning raw text rows into bars

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;

pub use bar::{DailyBar, parse_date};
pub use error::ParseError;
