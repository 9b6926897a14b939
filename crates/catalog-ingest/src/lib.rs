//! Course catalog ingestion.
//!
//! Loads a source sheet into a [`Dataset`] of text cells. Delimited text goes
//! through the `csv` crate; spreadsheet binaries (`xlsx`, `xlsm`, `xls`, `ods`)
//! through `calamine`, first worksheet only.
//!
//! The first non-blank row is the header row. Fully blank rows are dropped and
//! cells are trimmed, so `read_dataset` never yields a row of only whitespace.

mod csv_table;
mod error;
mod workbook;

use std::path::Path;
use std::time::Instant;

use catalog_model::Dataset;
use tracing::info;

pub use csv_table::read_csv;
pub use error::{IngestError, Result};
pub use workbook::read_workbook;

/// Source formats understood by [`read_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Workbook,
}

impl InputFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Load a CSV or spreadsheet file.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = InputFormat::from_path(path)?;
    let start = Instant::now();
    let dataset = match format {
        InputFormat::Csv => read_csv(path)?,
        InputFormat::Workbook => read_workbook(path)?,
    };
    info!(
        path = %path.display(),
        format = ?format,
        rows = dataset.len(),
        columns = dataset.width(),
        duration_ms = start.elapsed().as_millis(),
        "source loaded"
    );
    Ok(dataset)
}

/// Trim a raw cell, dropping any byte-order mark.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Build a dataset from raw rows, taking the first non-blank row as headers.
pub(crate) fn dataset_from_raw(raw_rows: Vec<Vec<String>>) -> Dataset {
    let mut rows = raw_rows
        .into_iter()
        .filter(|row| row.iter().any(|value| !value.is_empty()));
    let Some(headers) = rows.next() else {
        return Dataset::default();
    };
    Dataset::from_rows(headers, rows.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_by_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("a/b.CSV")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("b.xlsx")).unwrap(),
            InputFormat::Workbook
        );
        assert!(matches!(
            InputFormat::from_path(Path::new("b.json")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn normalize_cell_strips_bom_and_whitespace() {
        assert_eq!(normalize_cell("\u{feff} Instituti "), "Instituti");
    }

    #[test]
    fn blank_rows_are_dropped_before_header_detection() {
        let dataset = dataset_from_raw(vec![
            vec![String::new(), String::new()],
            vec!["A".to_string(), "B".to_string()],
            vec![String::new(), String::new()],
            vec!["1".to_string()],
        ]);
        assert_eq!(dataset.headers(), ["A", "B"]);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.cell(0, 1), Some(""));
    }
}
