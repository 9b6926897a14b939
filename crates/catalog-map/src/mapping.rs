use std::collections::BTreeMap;

use catalog_model::Field;
use serde::Serialize;

/// Closest canonical field for a header that did not map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion {
    pub field: Field,
    /// Jaro-Winkler similarity in `0.0..=1.0`.
    pub score: f64,
}

/// How a source header was resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// Header already is a canonical name.
    Exact,
    /// Header matched a known variant pattern.
    Variant { pattern: String },
    /// Nothing matched; the header passes through unchanged.
    Unmapped { suggestion: Option<Suggestion> },
}

/// Resolution of one source header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMatch {
    pub source: String,
    pub field: Option<Field>,
    pub kind: MatchKind,
}

impl ColumnMatch {
    /// Header text after normalization.
    pub fn target(&self) -> &str {
        match self.field {
            Some(field) => field.name(),
            None => &self.source,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.field.is_some()
    }
}

/// Header resolutions in source column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnMapping {
    pub entries: Vec<ColumnMatch>,
}

impl ColumnMapping {
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_mapped()).count()
    }

    /// Headers that will not be validated.
    pub fn unmapped(&self) -> impl Iterator<Item = &ColumnMatch> {
        self.entries.iter().filter(|entry| !entry.is_mapped())
    }

    /// Canonical fields claimed by more than one source header, with those headers.
    ///
    /// Only the first such column is cleaned and validated.
    pub fn duplicates(&self) -> BTreeMap<Field, Vec<&str>> {
        let mut claimed: BTreeMap<Field, Vec<&str>> = BTreeMap::new();
        for entry in &self.entries {
            if let Some(field) = entry.field {
                claimed.entry(field).or_default().push(entry.source.as_str());
            }
        }
        claimed.retain(|_, sources| sources.len() > 1);
        claimed
    }

    /// Canonical fields with no source column.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.entries.iter().any(|entry| entry.field == Some(*field)))
            .collect()
    }
}
