//! Value cleaning for normalized course catalog datasets.
//!
//! - **values**: pure per-cell rewrites (null markers, date suffixes, study
//!   mode keywords, compound URL cells)
//! - **cleaner**: [`ValueCleaner`] applies them to a dataset in place
//!
//! Cleaning never fails. A value that cannot be rewritten is left as it is so
//! the field validator can name the exact problem.

pub mod cleaner;
pub mod values;

pub use cleaner::{CleaningReport, ValueCleaner};
pub use values::{CompoundUrl, extract_date, is_null_marker, split_compound_url};
