//! Course catalog validation engine.
//!
//! - **checks**: one pure rule function per field group
//! - **validators**: [`CourseValidators`], the rule set dispatched per field
//! - **probe**: URL reachability ([`HttpProbe`], [`FormatOnlyProbe`])
//! - **orchestrator**: sequential row loop with cancellation and a row callback
//! - **worker**: the same loop on a background thread, streaming events
//!
//! # Example
//!
//! ```ignore
//! use catalog_model::CatalogRules;
//! use catalog_validate::{CourseValidators, validate};
//!
//! let validators = CourseValidators::format_only(&CatalogRules::default());
//! let report = validate(&dataset, &validators);
//! for record in &report.records {
//!     println!("row {} {}: {}", record.row(), record.column(), record.message());
//! }
//! ```

pub mod checks;
mod context;
mod error;
mod orchestrator;
mod probe;
mod validators;
mod worker;

pub use context::CourseIdIndex;
pub use error::{Result, ValidateError};
pub use orchestrator::{CancellationToken, RowProgress, validate, validate_dataset};
pub use probe::{FormatOnlyProbe, HttpProbe, ProbeOutcome, UrlProbe};
pub use validators::{CourseValidators, VALIDATED_FIELDS, rule_categories};
pub use worker::{ValidationWorker, WorkerEvent};
