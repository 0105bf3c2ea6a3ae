//! CLI command implementations.

pub(crate) mod returns;
pub(crate) mod slice;
pub(crate) mod sma;
pub(crate) mod summary;

use anyhow::{Context, Result};
use marcona_lib::prelude::*;
use std::path::Path;

/// Load an OHLCV file into a time series.
pub(crate) fn load_series(file: &Path, skip_header: bool) -> Result<TimeSeries> {
    let rows = read_rows(file, skip_header)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    TimeSeries::from_rows(&rows)
        .with_context(|| format!("Malformed row in {}", file.display()))
}
