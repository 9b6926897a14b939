//! Column normalization for course catalog sheets.
//!
//! Source sheets arrive with truncated or mangled headers (`Instituti`,
//! `Course I`, `Course sCourse`). [`ColumnNormalizer`] maps each header to a
//! canonical [`Field`](catalog_model::Field):
//!
//! 1. an exact canonical name passes through unchanged;
//! 2. otherwise the configured variant table is scanned in order, first for a
//!    pattern contained in the header, then for a header contained in a pattern;
//! 3. anything else stays as-is and is reported as unmapped, with the closest
//!    canonical name as a suggestion.
//!
//! Unmapped columns are never validated, so the mapping result lists them for
//! the caller to surface.

mod mapping;
mod normalizer;

pub use mapping::{ColumnMapping, ColumnMatch, MatchKind, Suggestion};
pub use normalizer::{ColumnNormalizer, MIN_REVERSE_MATCH_LEN, SUGGESTION_MIN_SCORE};
