//! Validation report output.
//!
//! - **XLSX**: the cleaned data with every failing cell filled in its error
//!   category color, a trailing error count per row, a summary sheet and a
//!   sheet listing every error record
//! - **JSON**: the validation report as a machine-readable document

mod error;
mod json;
mod workbook;

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

pub use error::{ReportError, Result};
pub use json::{CategoryCount, JsonReport, write_json};
pub use workbook::{
    DETAILS_SHEET, DATA_SHEET, ERROR_COUNT_HEADER, HEADER_COLOR, MAX_COLUMN_WIDTH, SUMMARY_SHEET,
    write_workbook,
};

/// Default report file name for a run at `now`:
/// `validated_course_data_<YYYYmmdd_HHMMSS>.xlsx`.
pub fn default_report_name<Tz>(now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!(
        "validated_course_data_{}.xlsx",
        now.format("%Y%m%d_%H%M%S")
    ))
}
