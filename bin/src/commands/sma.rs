//! Moving-average command implementation.

use anyhow::{Context, Result};
use marcona_lib::prelude::*;
use std::path::Path;

use crate::commands::load_series;
use crate::display::print_dated_values;

/// Print a simple moving average of the closes, reported against the date
/// that closes each window.
pub(crate) fn sma(file: &Path, window: usize, skip_header: bool) -> Result<()> {
    let series = load_series(file, skip_header)?;
    let closes = series.closes();

    let averages = moving_average(&closes, window).with_context(|| {
        format!(
            "Cannot compute a {window}-bar average over {} bars",
            closes.len()
        )
    })?;

    let dates = series.iter().map(|bar| bar.date).skip(window - 1);
    print_dated_values("SMA", dates.zip(averages));

    Ok(())
}
