use std::path::Path;

use catalog_model::Dataset;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::{dataset_from_raw, normalize_cell};

/// Read a delimited text file into a dataset.
///
/// Rows may have any number of fields; short rows are padded with empty cells.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut raw_rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        raw_rows.push(record.iter().map(normalize_cell).collect::<Vec<_>>());
    }
    debug!(path = %path.display(), records = raw_rows.len(), "csv records read");
    Ok(dataset_from_raw(raw_rows))
}
