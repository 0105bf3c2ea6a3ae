//! Display utilities and output formatting for the marcona CLI.

use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use marcona_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output format for extracted bars.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Report format for the summary command.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ReportFormat {
    Text,
    Json,
}

/// Write bars to a file, or to stdout when no path is given.
pub(crate) fn write_bars(bars: &[DailyBar], output: Option<&PathBuf>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_bars_to(bars, BufWriter::new(file), format)
        }
        None => write_bars_to(bars, io::stdout().lock(), format),
    }
}

fn write_bars_to<W: Write>(bars: &[DailyBar], writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_bars(bars, writer)?,
        Format::Tsv => CsvFormatter::tsv().write_bars(bars, writer)?,
        Format::Json => JsonFormatter::new().write_bars(bars, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_bars(bars, writer)?,
    }

    Ok(())
}

/// Print a two-column table of dates and values.
pub(crate) fn print_dated_values<I>(header: &str, rows: I)
where
    I: IntoIterator<Item = (NaiveDate, f64)>,
{
    println!("{:<12} {:>14}", "DATE", header);
    println!("{}", "-".repeat(27));

    for (date, value) in rows {
        println!("{:<12} {:>14.6}", date.format("%Y-%m-%d").to_string(), value);
    }
}
