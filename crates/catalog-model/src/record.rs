//! Validation verdicts and error records.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::field::Field;

/// A failed rule: the category it belongs to and a message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub category: Category,
    pub message: String,
}

impl Violation {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// Outcome of a single field check.
pub type Verdict = std::result::Result<(), Violation>;

/// One reported rule violation for a (row, field) pair.
///
/// Records are created by the validation pass and never modified afterwards,
/// so fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    row: usize,
    column: Field,
    error_type: Category,
    message: String,
    value: String,
}

impl ErrorRecord {
    /// Build a record for 1-based `row` from a failed verdict.
    pub fn new(row: usize, column: Field, value: impl Into<String>, violation: Violation) -> Self {
        Self {
            row,
            column,
            error_type: violation.category,
            message: violation.message,
            value: value.into(),
        }
    }

    /// 1-based row number.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> Field {
        self.column
    }

    pub fn error_type(&self) -> Category {
        self.error_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending raw value as text.
    pub fn value(&self) -> &str {
        &self.value
    }
}
