use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use catalog_model::Dataset;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::{dataset_from_raw, normalize_cell};

/// Read the first worksheet of a spreadsheet into a dataset.
pub fn read_workbook(path: &Path) -> Result<Dataset> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let sheet_name = workbook.sheet_names().first().cloned();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| normalize_cell(&cell_text(cell))).collect())
        .collect();
    debug!(
        path = %path.display(),
        sheet = sheet_name.as_deref().unwrap_or_default(),
        records = raw_rows.len(),
        "worksheet rows read"
    );
    Ok(dataset_from_raw(raw_rows))
}

/// Render a spreadsheet cell as the text a user sees.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => float_text(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(_) => cell
            .as_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::Error(error) => error.to_string(),
    }
}

/// Whole numbers lose the fractional part: ids stored as `108.0` read as `108`.
fn float_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(float_text(108.0), "108");
        assert_eq!(float_text(-3.0), "-3");
        assert_eq!(float_text(1250.5), "1250.5");
    }

    #[test]
    fn cell_text_covers_scalar_variants() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
        assert_eq!(cell_text(&Data::String("Law".to_string())), "Law");
    }
}
