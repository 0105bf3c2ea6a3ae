//! End-to-end pipeline: delimited file -> series -> slice -> statistics.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use marcona_lib::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Ten January 2020 trading days with closes stepping 101..=110.
fn write_fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();

    for day in 1..=10 {
        let close = 100 + day;
        writeln!(
            file,
            "2020-01-{day:02},{},{},{},{close},{}",
            close - 1,
            close + 2,
            close - 2,
            day * 1000
        )
        .unwrap();
    }

    file
}

#[test]
fn file_to_series_to_statistics() {
    let file = write_fixture();

    let rows = read_rows(file.path(), true).unwrap();
    assert_eq!(rows.len(), 10);

    let series = TimeSeries::from_rows(&rows).unwrap();
    assert_eq!(series.len(), 10);

    let closes = series.closes();
    assert_relative_eq!(mean(&closes), 105.5);
    assert_relative_eq!(
        variance(&closes).unwrap(),
        8.25,
        epsilon = 1e-9
    );

    let daily = returns(&closes);
    assert_eq!(daily.len(), 9);
    assert_relative_eq!(daily[0], 102.0 / 101.0 - 1.0, epsilon = 1e-12);

    let sma = moving_average(&closes, 10).unwrap();
    assert_eq!(sma, vec![105.5]);
}

#[test]
fn slice_is_exclusive_on_both_ends() {
    let file = write_fixture();

    let rows = read_rows(file.path(), true).unwrap();
    let series = TimeSeries::from_rows(&rows).unwrap();

    let bars = series.slice(date(2020, 1, 2), date(2020, 1, 5));
    let dates: Vec<_> = bars.iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![date(2020, 1, 3), date(2020, 1, 4)]);

    // Sliced bars feed straight back into the statistics functions.
    let sliced_closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    assert_relative_eq!(mean(&sliced_closes), 103.5);
}

#[test]
fn sliced_output_reparses() {
    let file = write_fixture();

    let rows = read_rows(file.path(), true).unwrap();
    let series = TimeSeries::from_rows(&rows).unwrap();
    let bars = series.slice(date(2020, 1, 1), date(2020, 1, 6));

    let mut buffer = Vec::new();
    CsvFormatter::new().write_bars(&bars, &mut buffer).unwrap();

    let mut out = NamedTempFile::new().unwrap();
    out.write_all(&buffer).unwrap();

    let reread = TimeSeries::from_rows(&read_rows(out.path(), true).unwrap()).unwrap();
    assert_eq!(reread.len(), bars.len());
    assert_eq!(reread.bars(), &bars[..]);
}
