//! Summary command implementation.
//!
//! This module computes the headline statistics of a file's closing
//! prices: record count, date span, mean, variance and standard deviation,
//! plus the mean of the day-over-day returns when the file is long enough.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use marcona_lib::prelude::*;
use serde::Serialize;
use std::path::Path;

use crate::commands::load_series;
use crate::display::ReportFormat;

/// Headline statistics of one OHLCV file.
#[derive(Serialize)]
struct Summary {
    bars: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
    mean_close: f64,
    close_variance: f64,
    close_std_deviation: f64,
    mean_daily_return: Option<f64>,
}

/// Summarize the closing prices of an OHLCV file.
pub(crate) fn summary(file: &Path, skip_header: bool, format: ReportFormat) -> Result<()> {
    let series = load_series(file, skip_header)?;
    if series.is_empty() {
        bail!("{} holds no bars", file.display());
    }

    let closes = series.closes();
    let daily_returns = returns(&closes);

    let report = Summary {
        bars: series.len(),
        first_date: series.bars()[0].date,
        last_date: series.bars()[series.len() - 1].date,
        mean_close: mean(&closes),
        close_variance: variance(&closes)?,
        close_std_deviation: std_deviation(&closes)?,
        mean_daily_return: (!daily_returns.is_empty()).then(|| mean(&daily_returns)),
    };

    match format {
        ReportFormat::Text => print_text(file, &report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text(file: &Path, report: &Summary) {
    println!("File:           {}", file.display());
    println!("Bars:           {}", report.bars);
    println!(
        "Span:           {} to {}",
        report.first_date.format("%Y-%m-%d"),
        report.last_date.format("%Y-%m-%d")
    );
    println!("Mean close:     {:.6}", report.mean_close);
    println!("Variance:       {:.6}", report.close_variance);
    println!("Std deviation:  {:.6}", report.close_std_deviation);

    match report.mean_daily_return {
        Some(value) => println!("Mean return:    {value:.6}"),
        None => println!("Mean return:    n/a (need at least 2 bars)"),
    }
}
