//! Returns command implementation.

use anyhow::Result;
use marcona_lib::prelude::*;
use std::path::Path;

use crate::commands::load_series;
use crate::display::print_dated_values;

/// Print period-over-period returns of the closes, one row per date.
///
/// Return `i` compares bar `i+1` against bar `i` and is reported against
/// the later bar's date.
pub(crate) fn returns(file: &Path, log: bool, skip_header: bool) -> Result<()> {
    let series = load_series(file, skip_header)?;
    let closes = series.closes();

    let values = if log {
        marcona_lib::log_returns(&closes)
    } else {
        marcona_lib::returns(&closes)
    };

    if values.is_empty() {
        println!("Not enough data: returns need at least 2 bars.");
        return Ok(());
    }

    let dates = series.iter().map(|bar| bar.date).skip(1);
    let header = if log { "LOG RETURN" } else { "RETURN" };
    print_dated_values(header, dates.zip(values));

    Ok(())
}
