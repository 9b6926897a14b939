//! Background validation on a dedicated thread.
//!
//! The worker owns the dataset for the length of the run and streams one
//! event per row over a channel. Cancelling is cooperative; the final report
//! always arrives, partial when cancelled.

use std::thread::{self, JoinHandle};

use catalog_model::{Dataset, ErrorRecord, ValidationReport};
use crossbeam_channel::{Receiver, unbounded};
use tracing::debug;

use crate::error::{Result, ValidateError};
use crate::orchestrator::{CancellationToken, validate_dataset};
use crate::validators::CourseValidators;

/// Message sent by a running worker.
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    /// A row finished validating.
    Row {
        row: usize,
        total_rows: usize,
        errors: Vec<ErrorRecord>,
        total_errors: usize,
    },
    /// The run ended, completely or by cancellation.
    Finished(ValidationReport),
}

/// Handle to a validation run on its own thread.
pub struct ValidationWorker {
    handle: JoinHandle<ValidationReport>,
    events: Receiver<WorkerEvent>,
    cancel: CancellationToken,
}

impl ValidationWorker {
    /// Start validating `dataset` on a new thread.
    pub fn spawn(dataset: Dataset, validators: CourseValidators) -> Result<Self> {
        Self::spawn_with_error_limit(dataset, validators, None)
    }

    /// Like [`spawn`](Self::spawn), but the worker cancels itself once
    /// `max_errors` records have accumulated.
    pub fn spawn_with_error_limit(
        dataset: Dataset,
        validators: CourseValidators,
        max_errors: Option<usize>,
    ) -> Result<Self> {
        let (sender, events) = unbounded();
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = thread::Builder::new()
            .name("catalog-validate".to_string())
            .spawn(move || {
                let report = validate_dataset(&dataset, &validators, &token, |progress| {
                    if max_errors.is_some_and(|limit| progress.total_errors >= limit) {
                        token.cancel();
                    }
                    // A dropped receiver only means nobody is watching.
                    let _ = sender.send(WorkerEvent::Row {
                        row: progress.row,
                        total_rows: progress.total_rows,
                        errors: progress.errors.to_vec(),
                        total_errors: progress.total_errors,
                    });
                });
                let _ = sender.send(WorkerEvent::Finished(report.clone()));
                report
            })
            .map_err(ValidateError::Spawn)?;
        debug!("validation worker started");
        Ok(Self {
            handle,
            events,
            cancel,
        })
    }

    /// Events in the order rows were validated, then `Finished`.
    pub fn events(&self) -> &Receiver<WorkerEvent> {
        &self.events
    }

    /// Ask the worker to stop before its next row.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait for the run to end and return its report.
    pub fn join(self) -> Result<ValidationReport> {
        self.handle.join().map_err(|_| ValidateError::WorkerPanicked)
    }
}
