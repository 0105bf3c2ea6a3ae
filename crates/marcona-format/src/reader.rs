//! Delimited-text input reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::FormatError;

/// Reads a delimited text file into rows of string fields.
///
/// Each line is split on `,` with no quoting or escaping support; fields
/// containing commas are not representable. With `skip_header` set the
/// first line is dropped. Empty lines produce a single empty field, like
/// any other line without a delimiter.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_rows<P: AsRef<Path>>(
    path: P,
    skip_header: bool,
) -> Result<Vec<Vec<String>>, FormatError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut result = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if skip_header && index == 0 {
            continue;
        }

        result.push(line.split(',').map(str::to_string).collect());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_rows_skips_header() {
        let file = data_file("Date,Open,High,Low,Close,Volume\n2020-01-02,10,12,9,11,5000\n");
        let rows = read_rows(file.path(), true).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "2020-01-02");
        assert_eq!(rows[0][5], "5000");
    }

    #[test]
    fn test_read_rows_keeps_header() {
        let file = data_file("Date,Open\n2020-01-02,10\n");
        let rows = read_rows(file.path(), false).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Date");
    }

    #[test]
    fn test_read_rows_no_quoting() {
        // Quotes are plain characters; the embedded comma still splits.
        let file = data_file("a,\"b,c\",d\n");
        let rows = read_rows(file.path(), false).unwrap();

        assert_eq!(rows[0], vec!["a", "\"b", "c\"", "d"]);
    }

    #[test]
    fn test_read_rows_missing_file() {
        let result = read_rows("/nonexistent/bars.csv", true);
        assert!(matches!(result, Err(FormatError::Io(_))));
    }
}
