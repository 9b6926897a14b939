//! Error types for course catalog ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a source sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Extension is not a supported tabular format.
    #[error("unsupported input format '{extension}' for {path} (expected csv, xlsx, xlsm, xls or ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Failed to parse delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheet to read.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("/data/catalog.txt"),
            extension: "txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported input format 'txt' for /data/catalog.txt (expected csv, xlsx, xlsm, xls or ods)"
        );
    }
}
