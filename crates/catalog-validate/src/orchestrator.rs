//! Row-by-row validation of a dataset.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use catalog_model::{Dataset, ErrorRecord, ValidationReport};
use tracing::{debug, info, info_span};

use crate::context::CourseIdIndex;
use crate::validators::CourseValidators;

/// Cooperative stop flag shared between a caller and a running validation.
///
/// Checked once per row boundary.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Progress after one row has been validated.
#[derive(Debug, Clone, Copy)]
pub struct RowProgress<'a> {
    /// 1-based number of the row just validated.
    pub row: usize,
    pub total_rows: usize,
    /// Records produced by this row.
    pub errors: &'a [ErrorRecord],
    /// Records produced so far, this row included.
    pub total_errors: usize,
}

/// Validate every row in order, with no progress callback.
pub fn validate(dataset: &Dataset, validators: &CourseValidators) -> ValidationReport {
    validate_dataset(dataset, validators, &CancellationToken::new(), |_| {})
}

/// Validate every row in order.
///
/// The Course Id index is built once before the first row. `on_row` runs after
/// each row. When `cancel` is set, the run stops before the next row and the
/// report keeps the records gathered so far, marked as cancelled.
pub fn validate_dataset<F>(
    dataset: &Dataset,
    validators: &CourseValidators,
    cancel: &CancellationToken,
    mut on_row: F,
) -> ValidationReport
where
    F: FnMut(&RowProgress<'_>),
{
    let span = info_span!("validate", rows = dataset.len());
    let _guard = span.enter();
    let start = Instant::now();

    let course_ids = CourseIdIndex::build(dataset);
    debug!(
        duplicated_course_ids = course_ids.duplicated_values(),
        "course id index built"
    );

    let mut report = ValidationReport::new(dataset.len());
    for row in dataset.rows() {
        if cancel.is_cancelled() {
            report.cancelled = true;
            info!(
                rows_validated = report.rows_validated,
                total_rows = report.total_rows,
                "validation cancelled"
            );
            break;
        }
        let first_new = report.records.len();
        report.records.extend(validators.validate_row(&row, &course_ids));
        report.rows_validated += 1;

        let errors = &report.records[first_new..];
        if !errors.is_empty() {
            debug!(row = row.number(), errors = errors.len(), "row has errors");
        }
        on_row(&RowProgress {
            row: row.number(),
            total_rows: report.total_rows,
            errors,
            total_errors: report.records.len(),
        });
    }

    info!(
        rows_validated = report.rows_validated,
        errors = report.error_count(),
        rows_with_errors = report.rows_with_errors().len(),
        cancelled = report.cancelled,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    report
}
