//! marcona CLI - Descriptive statistics over daily OHLCV data files.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::{Format, ReportFormat};

#[derive(Parser)]
#[command(name = "marcona")]
#[command(about = "Descriptive statistics over daily OHLCV data files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Treat the first input row as data instead of skipping it as a header
    #[arg(long, global = true)]
    no_header: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the closing prices of an OHLCV file
    Summary {
        /// Input file with rows of date,open,high,low,close,volume
        file: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Print period-over-period returns of the closes
    Returns {
        /// Input file with rows of date,open,high,low,close,volume
        file: PathBuf,

        /// Natural-log returns instead of simple returns
        #[arg(long)]
        log: bool,
    },

    /// Print a simple moving average of the closes
    Sma {
        /// Input file with rows of date,open,high,low,close,volume
        file: PathBuf,

        /// Window size in bars
        #[arg(short, long)]
        window: usize,
    },

    /// Extract the bars dated strictly inside a date range
    Slice {
        /// Input file with rows of date,open,high,low,close,volume
        file: PathBuf,

        /// Start date (YYYY-MM-DD), excluded from the result
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD), excluded from the result
        #[arg(short, long, conflicts_with = "days")]
        end: Option<String>,

        /// Range length in calendar days from the start date
        #[arg(short, long)]
        days: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let skip_header = !cli.no_header;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Summary { file, format } => commands::summary::summary(&file, skip_header, format),
        Commands::Returns { file, log } => commands::returns::returns(&file, log, skip_header),
        Commands::Sma { file, window } => commands::sma::sma(&file, window, skip_header),
        Commands::Slice {
            file,
            start,
            end,
            days,
            format,
            output,
        } => commands::slice::slice(
            &file,
            &start,
            end.as_deref(),
            days,
            format,
            output,
            skip_header,
        ),
    }
}
