use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use catalog_model::{Category, ErrorRecord, ValidationReport};
use serde::Serialize;
use tracing::info;

use crate::error::{ReportError, Result};

/// Error count for one category.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub error_type: Category,
    pub count: usize,
}

/// Serialized shape of a validation report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub total_rows: usize,
    pub rows_validated: usize,
    pub complete: bool,
    pub total_errors: usize,
    pub rows_with_errors: usize,
    /// Categories that occurred, in category order.
    pub errors_by_type: Vec<CategoryCount>,
    pub errors: &'a [ErrorRecord],
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a ValidationReport) -> Self {
        let counts = report.counts_by_category();
        Self {
            total_rows: report.total_rows,
            rows_validated: report.rows_validated,
            complete: report.is_complete(),
            total_errors: report.error_count(),
            rows_with_errors: report.rows_with_errors().len(),
            errors_by_type: Category::all()
                .iter()
                .filter_map(|category| {
                    counts.get(category).map(|count| CategoryCount {
                        error_type: *category,
                        count: *count,
                    })
                })
                .collect(),
            errors: &report.records,
        }
    }
}

/// Write the report as pretty-printed JSON.
pub fn write_json(path: &Path, report: &ValidationReport) -> Result<()> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &JsonReport::new(report)).map_err(|source| {
        ReportError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(io_error)?;
    writer.flush().map_err(io_error)?;
    info!(path = %path.display(), errors = report.error_count(), "json report written");
    Ok(())
}
