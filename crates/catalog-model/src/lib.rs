//! Course catalog data model.
//!
//! Shared types for every stage of the validation pipeline:
//!
//! - **Fields** (`field`): the 17 canonical column names the validator understands
//! - **Categories** (`category`): error taxonomy used for classification and report colors
//! - **Dataset** (`dataset`): ordered rows of untyped text keyed by header
//! - **Records** (`record`): one reported rule violation per (row, field)
//! - **Report** (`report`): the accumulated outcome of a validation run
//! - **Rules** (`rules`): immutable rule tables, loadable from TOML

pub mod category;
pub mod dataset;
pub mod error;
pub mod field;
pub mod record;
pub mod report;
pub mod rules;

pub use category::Category;
pub use dataset::{Dataset, Row};
pub use error::{ConfigError, Result};
pub use field::Field;
pub use record::{ErrorRecord, Verdict, Violation};
pub use report::ValidationReport;
pub use rules::{
    CatalogRules, CleaningRules, ColumnRules, ColumnVariant, FieldRules, StudyModeKeyword,
    UrlRules,
};
