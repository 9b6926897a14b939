//! Validation run report.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::record::ErrorRecord;

/// Error records accumulated by one validation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Rows in the dataset.
    pub total_rows: usize,
    /// Rows actually validated (less than `total_rows` after cancellation).
    pub rows_validated: usize,
    /// Set when the run stopped early on request.
    pub cancelled: bool,
    pub records: Vec<ErrorRecord>,
}

impl ValidationReport {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }

    pub fn error_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.records.is_empty()
    }

    /// True when every row was validated.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.rows_validated == self.total_rows
    }

    /// Distinct 1-based row numbers carrying at least one error.
    pub fn rows_with_errors(&self) -> BTreeSet<usize> {
        self.records.iter().map(ErrorRecord::row).collect()
    }

    /// Error counts per category, only for categories that occurred.
    pub fn counts_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.error_type()).or_insert(0) += 1;
        }
        counts
    }

    /// Records for one 1-based row number.
    pub fn errors_for_row(&self, row: usize) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter().filter(move |record| record.row() == row)
    }
}
