use std::time::Instant;

use catalog_model::{ColumnRules, ColumnVariant, Dataset, Field};
use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use tracing::{debug, info, warn};

use crate::mapping::{ColumnMapping, ColumnMatch, MatchKind, Suggestion};

/// Shortest header allowed to match by being contained in a variant pattern.
///
/// Keeps one- and two-letter headers from claiming the first pattern that
/// happens to contain them.
pub const MIN_REVERSE_MATCH_LEN: usize = 4;

/// Lowest similarity reported as a suggestion for an unmapped header.
pub const SUGGESTION_MIN_SCORE: f64 = 0.6;

/// Maps source headers to canonical field names.
#[derive(Debug, Clone)]
pub struct ColumnNormalizer {
    variants: Vec<ColumnVariant>,
}

impl ColumnNormalizer {
    pub fn new(rules: &ColumnRules) -> Self {
        Self {
            variants: rules.variants.clone(),
        }
    }

    /// Resolve a single header.
    ///
    /// Tries an exact canonical name, then every variant pattern contained in
    /// the header, then every pattern containing the header. The last pass
    /// only runs for headers of at least [`MIN_REVERSE_MATCH_LEN`] characters,
    /// so `"Stu"` stays unmapped while `"Study"` maps through `"Study M"`.
    pub fn resolve(&self, header: &str) -> ColumnMatch {
        let trimmed = header.trim();
        if let Some(field) = Field::from_name(trimmed) {
            return ColumnMatch {
                source: header.to_string(),
                field: Some(field),
                kind: MatchKind::Exact,
            };
        }

        let forward = self
            .variants
            .iter()
            .find(|variant| trimmed.contains(variant.pattern.as_str()));
        let reverse = || {
            if trimmed.chars().count() < MIN_REVERSE_MATCH_LEN {
                return None;
            }
            self.variants
                .iter()
                .find(|variant| variant.pattern.contains(trimmed))
        };

        match forward.or_else(reverse) {
            Some(variant) => ColumnMatch {
                source: header.to_string(),
                field: Some(variant.field),
                kind: MatchKind::Variant {
                    pattern: variant.pattern.clone(),
                },
            },
            None => ColumnMatch {
                source: header.to_string(),
                field: None,
                kind: MatchKind::Unmapped {
                    suggestion: suggest(trimmed),
                },
            },
        }
    }

    /// Resolve every header in order.
    pub fn map_headers<'a, I>(&self, headers: I) -> ColumnMapping
    where
        I: IntoIterator<Item = &'a str>,
    {
        ColumnMapping {
            entries: headers.into_iter().map(|header| self.resolve(header)).collect(),
        }
    }

    /// Rename the dataset's headers to canonical names and return the mapping.
    pub fn apply(&self, dataset: &mut Dataset) -> ColumnMapping {
        let start = Instant::now();
        let mapping = self.map_headers(dataset.headers().iter().map(String::as_str));
        let mut targets = mapping.entries.iter().map(|entry| entry.target().to_string());
        dataset.rename_headers(|current| targets.next().unwrap_or_else(|| current.to_string()));

        for entry in &mapping.entries {
            match &entry.kind {
                MatchKind::Exact => {}
                MatchKind::Variant { pattern } => {
                    debug!(header = %entry.source, field = %entry.target(), pattern = %pattern, "header normalized");
                }
                MatchKind::Unmapped { suggestion } => {
                    warn!(
                        header = %entry.source,
                        suggestion = suggestion.map(|s| s.field.name()).unwrap_or("none"),
                        "header does not match a canonical field; column will not be validated"
                    );
                }
            }
        }
        for (field, sources) in mapping.duplicates() {
            warn!(
                field = %field,
                headers = ?sources,
                "several headers map to the same field; only the first is validated"
            );
        }
        info!(
            columns = mapping.entries.len(),
            mapped = mapping.mapped_count(),
            unmapped = mapping.entries.len() - mapping.mapped_count(),
            duration_ms = start.elapsed().as_millis(),
            "column normalization complete"
        );
        mapping
    }
}

impl Default for ColumnNormalizer {
    fn default() -> Self {
        Self::new(&ColumnRules::default())
    }
}

/// Closest canonical field by Jaro-Winkler similarity on lowercased names.
fn suggest(header: &str) -> Option<Suggestion> {
    if header.is_empty() {
        return None;
    }
    let lowered = header.to_lowercase();
    Field::ALL
        .into_iter()
        .map(|field| Suggestion {
            field,
            score: jaro_similarity(lowered.chars(), field.name().to_lowercase().chars()),
        })
        .filter(|suggestion| suggestion.score >= SUGGESTION_MIN_SCORE)
        .max_by(|a, b| a.score.total_cmp(&b.score))
}
