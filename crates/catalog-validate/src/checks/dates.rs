//! Course start date format.

use std::sync::LazyLock;

use catalog_model::{Category, Verdict, Violation};
use chrono::NaiveDate;
use regex::Regex;

use super::is_blank;

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid ISO date regex"));

/// True for a real calendar date written exactly as `YYYY-MM-DD`.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Every comma-separated component must be a `YYYY-MM-DD` date.
pub fn check_start_date(value: &str) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Date, "Course start date cannot be blank"));
    }
    match value.trim().split(',').map(str::trim).find(|part| !is_iso_date(part)) {
        Some(bad) => Err(Violation::new(
            Category::Date,
            format!("Invalid date format: {bad}. Must be YYYY-MM-DD"),
        )),
        None => Ok(()),
    }
}
