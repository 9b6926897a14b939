//! Dataset-wide context shared read-only by every row.

use std::collections::HashMap;

use catalog_model::{Dataset, Field};

/// Occurrence counts of Course Id values across the whole dataset.
///
/// Values are compared after trimming; blank values are not counted. Numeric
/// values are compared by number, so `108` and `108.0` are the same id.
#[derive(Debug, Clone, Default)]
pub struct CourseIdIndex {
    counts: HashMap<String, usize>,
}

impl CourseIdIndex {
    /// Count the dataset's first `Course Id` column. Empty when there is none.
    pub fn build(dataset: &Dataset) -> Self {
        dataset
            .column_values(Field::CourseId.name())
            .map(Self::from_values)
            .unwrap_or_default()
    }

    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = HashMap::new();
        for value in values.into_iter().filter(|v| !v.trim().is_empty()) {
            *counts.entry(id_key(value)).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, value: &str) -> usize {
        self.counts.get(&id_key(value)).copied().unwrap_or(0)
    }

    /// Number of distinct values seen more than once.
    pub fn duplicated_values(&self) -> usize {
        self.counts.values().filter(|count| **count > 1).count()
    }
}

/// Comparison key for one Course Id cell.
fn id_key(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => number.to_string(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_trimmed_non_blank_values() {
        let index = CourseIdIndex::from_values(["108", " 108", "", "  ", "109"]);
        assert_eq!(index.count("108"), 2);
        assert_eq!(index.count("109 "), 1);
        assert_eq!(index.count(""), 0);
        assert_eq!(index.duplicated_values(), 1);
    }

    #[test]
    fn numeric_ids_compare_by_value() {
        let index = CourseIdIndex::from_values(["108", "108.0", "1.08e2", "0108", "A108"]);
        assert_eq!(index.count("108"), 4);
        assert_eq!(index.count("108.00"), 4);
        assert_eq!(index.count("A108"), 1);
        assert_eq!(index.duplicated_values(), 1);
    }

    #[test]
    fn missing_column_gives_empty_index() {
        let dataset = Dataset::new(vec!["Course Name".to_string()]);
        assert_eq!(CourseIdIndex::build(&dataset).count("1"), 0);
    }
}
