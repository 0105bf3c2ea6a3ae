//! Slice command implementation.

use anyhow::{Context, Result, bail};
use chrono::TimeDelta;
use marcona_lib::prelude::*;
use std::path::{Path, PathBuf};

use crate::commands::load_series;
use crate::display::{Format, write_bars};

/// Extract the bars dated strictly inside a date range.
///
/// Both endpoints are excluded: `--start 2020-01-02 --end 2020-01-05`
/// yields the bars of January 3rd and 4th only. `--days N` slices the same
/// way against `start + N` calendar days.
pub(crate) fn slice(
    file: &Path,
    start: &str,
    end: Option<&str>,
    days: Option<i64>,
    format: Format,
    output: Option<PathBuf>,
    skip_header: bool,
) -> Result<()> {
    let series = load_series(file, skip_header)?;
    let start = parse_date(start).context("Invalid --start date")?;

    let bars = match (end, days) {
        (Some(end), None) => {
            let end = parse_date(end).context("Invalid --end date")?;
            series.slice(start, end)
        }
        (None, Some(days)) => series.slice_for(start, TimeDelta::days(days)),
        _ => bail!("Provide exactly one of --end or --days"),
    };

    write_bars(&bars, output.as_ref(), format)
}
