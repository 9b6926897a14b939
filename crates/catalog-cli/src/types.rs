use std::path::PathBuf;

use catalog_map::ColumnMapping;
use catalog_model::ValidationReport;
use catalog_transform::CleaningReport;

/// Everything one `validate` run produced.
#[derive(Debug)]
pub struct ValidateOutcome {
    pub input: PathBuf,
    /// Report workbook, unless `--no-report` was given.
    pub workbook: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub mapping: ColumnMapping,
    pub cleaning: CleaningReport,
    pub report: ValidationReport,
}

impl ValidateOutcome {
    pub fn has_errors(&self) -> bool {
        self.report.has_errors()
    }
}
