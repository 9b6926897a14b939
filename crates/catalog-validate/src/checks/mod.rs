//! Per-field rule checks.
//!
//! Every check is total: it returns a [`Verdict`](catalog_model::Verdict) for
//! any input and never panics. Blank means empty or whitespace-only.

pub mod dates;
pub mod identifiers;
pub mod intake;
pub mod names;
pub mod required;
pub mod status;
pub mod urls;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}
