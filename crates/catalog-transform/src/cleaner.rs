//! In-place dataset cleaning.

use std::time::Instant;

use catalog_model::{CleaningRules, Dataset, Field};
use serde::Serialize;
use tracing::{debug, info};

use crate::values::{canonical_study_mode, extract_date, is_null_marker, split_compound_url};

/// Counts of cells rewritten by one cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub nulls_erased: usize,
    pub dates_trimmed: usize,
    pub study_modes_canonicalized: usize,
    pub urls_split: usize,
    /// Fields added to the dataset to hold values split out of URL cells.
    pub derived_columns: Vec<Field>,
}

impl CleaningReport {
    pub fn cells_changed(&self) -> usize {
        self.nulls_erased + self.dates_trimmed + self.study_modes_canonicalized + self.urls_split
    }
}

/// Rewrites raw cell values into the shape the field validators expect.
#[derive(Debug, Clone, Default)]
pub struct ValueCleaner {
    rules: CleaningRules,
}

impl ValueCleaner {
    pub fn new(rules: CleaningRules) -> Self {
        Self { rules }
    }

    /// Clean a dataset whose headers are already normalized.
    ///
    /// Null markers are erased first; the field rewrites then see empty cells
    /// rather than marker text.
    pub fn clean(&self, dataset: &mut Dataset) -> CleaningReport {
        let start = Instant::now();
        let mut report = CleaningReport::default();

        for cell in dataset.cells_mut() {
            if is_null_marker(cell, &self.rules.null_markers) {
                cell.clear();
                report.nulls_erased += 1;
            }
        }

        if let Some(col) = dataset.column_index(Field::CourseStartDate.name()) {
            for cell in dataset.column_cells_mut(col) {
                let Some(date) = extract_date(cell).map(str::to_string) else {
                    continue;
                };
                if date != *cell {
                    *cell = date;
                    report.dates_trimmed += 1;
                }
            }
        }

        if let Some(col) = dataset.column_index(Field::StudyMode.name()) {
            for cell in dataset.column_cells_mut(col) {
                let trimmed = cell.trim();
                let cleaned = canonical_study_mode(trimmed, &self.rules.study_modes).unwrap_or(trimmed);
                if cleaned != cell.as_str() {
                    *cell = cleaned.to_string();
                    report.study_modes_canonicalized += 1;
                }
            }
        }

        if dataset.has_column(Field::CourseLevelUrl.name()) {
            self.split_url_cells(dataset, &mut report);
        }

        info!(
            rows = dataset.len(),
            nulls_erased = report.nulls_erased,
            dates_trimmed = report.dates_trimmed,
            study_modes = report.study_modes_canonicalized,
            urls_split = report.urls_split,
            duration_ms = start.elapsed().as_millis(),
            "value cleaning complete"
        );
        report
    }

    fn split_url_cells(&self, dataset: &mut Dataset, report: &mut CleaningReport) {
        for field in [Field::CourseStatus, Field::Show] {
            if !dataset.has_column(field.name()) {
                dataset.ensure_column(field.name());
                report.derived_columns.push(field);
                debug!(field = %field, "derived column added");
            }
        }
        let (Some(url_col), Some(status_col), Some(show_col)) = (
            dataset.column_index(Field::CourseLevelUrl.name()),
            dataset.column_index(Field::CourseStatus.name()),
            dataset.column_index(Field::Show.name()),
        ) else {
            return;
        };

        for row in 0..dataset.len() {
            let Some(raw) = dataset.cell(row, url_col) else {
                continue;
            };
            let Some(split) =
                split_compound_url(raw, &self.rules.status_tokens, &self.rules.show_tokens)
            else {
                continue;
            };
            let url = if is_null_marker(split.url, &self.rules.null_markers) {
                String::new()
            } else {
                split.url.to_string()
            };
            let status = split.status.map(str::to_string);
            let show = split.show.map(str::to_string);

            if let Some(cell) = dataset.cell_mut(row, url_col) {
                *cell = url;
            }
            if let (Some(status), Some(cell)) = (status, dataset.cell_mut(row, status_col)) {
                *cell = status;
            }
            if let (Some(show), Some(cell)) = (show, dataset.cell_mut(row, show_col)) {
                *cell = show;
            }
            report.urls_split += 1;
        }
    }
}
