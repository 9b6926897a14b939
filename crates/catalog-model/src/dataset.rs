//! Tabular dataset of untyped text cells.
//!
//! A [`Dataset`] is the in-memory form of a loaded sheet: an ordered header list
//! and rows of text values. Every row holds exactly one value per header. Row
//! order is the row's identity; row `i` (0-based) is reported as row `i + 1`.
//!
//! Header names are not required to be unique. Lookups by name resolve to the
//! first column carrying that name.

use crate::field::Field;

/// Ordered rows keyed by header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create an empty dataset with the given headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Create a dataset from headers and rows.
    ///
    /// Short rows are padded with empty cells and long rows are truncated so
    /// that every row matches the header width.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut dataset = Self::new(headers);
        for row in rows {
            dataset.push_row(row);
        }
        dataset
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut values: Vec<String>) {
        values.resize(self.headers.len(), String::new());
        self.rows.push(values);
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Add an empty column unless one with this name exists. Returns its index.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// Replace header names in place. `rename` receives each current header.
    pub fn rename_headers<F>(&mut self, mut rename: F)
    where
        F: FnMut(&str) -> String,
    {
        for header in &mut self.headers {
            *header = rename(header);
        }
    }

    /// Borrow a row view.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            index,
            headers: &self.headers,
            values,
        })
    }

    /// Iterate row views in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(index, values)| Row {
            index,
            headers: &self.headers,
            values,
        })
    }

    /// Values of the first column named `name`, in row order.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map(String::as_str)
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut String> {
        self.rows.get_mut(row).and_then(|values| values.get_mut(column))
    }

    /// Mutable access to every cell of one column.
    pub fn column_cells_mut(&mut self, column: usize) -> impl Iterator<Item = &mut String> {
        self.rows.iter_mut().filter_map(move |row| row.get_mut(column))
    }

    /// Mutable access to every cell, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }
}

/// Borrowed view of one dataset row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: usize,
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// 0-based position in the dataset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based row number used in reports.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Value of the first column named `name`.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|header| header == name)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Value of a canonical field, `None` when the column is absent.
    pub fn field(&self, field: Field) -> Option<&'a str> {
        self.get(field.name())
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// `(header, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_rows(
            vec!["Course Id".to_string(), "Course Name".to_string()],
            vec![
                vec!["1".to_string(), "Law".to_string()],
                vec!["2".to_string()],
            ],
        )
    }

    #[test]
    fn rows_are_padded_to_header_width() {
        let dataset = sample();
        assert_eq!(dataset.cell(1, 1), Some(""));
        assert_eq!(dataset.width(), 2);
    }

    #[test]
    fn row_number_is_one_based() {
        let dataset = sample();
        let row = dataset.row(1).unwrap();
        assert_eq!(row.index(), 1);
        assert_eq!(row.number(), 2);
        assert_eq!(row.field(Field::CourseId), Some("2"));
        assert_eq!(row.field(Field::Show), None);
    }

    #[test]
    fn ensure_column_appends_once() {
        let mut dataset = sample();
        let idx = dataset.ensure_column("Show");
        assert_eq!(idx, 2);
        assert_eq!(dataset.ensure_column("Show"), 2);
        assert_eq!(dataset.cell(0, 2), Some(""));
    }

    #[test]
    fn duplicate_headers_resolve_to_first() {
        let dataset = Dataset::from_rows(
            vec!["Course Name".to_string(), "Course Name".to_string()],
            vec![vec!["First".to_string(), "Second".to_string()]],
        );
        assert_eq!(dataset.row(0).unwrap().get("Course Name"), Some("First"));
    }
}
