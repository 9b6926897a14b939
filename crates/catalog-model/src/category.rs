//! Error categories.
//!
//! Categories classify validation failures and select the fill color used when
//! the failing cell is highlighted in the report workbook.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Numeric,
    Unique,
    Capitalization,
    Blank,
    Date,
    #[serde(rename = "URL")]
    Url,
    Count,
    Status,
}

impl Category {
    /// Get all categories in report order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Numeric,
            Self::Unique,
            Self::Capitalization,
            Self::Blank,
            Self::Date,
            Self::Url,
            Self::Count,
            Self::Status,
        ]
    }

    /// Parse a category tag (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "numeric" => Some(Self::Numeric),
            "unique" => Some(Self::Unique),
            "capitalization" => Some(Self::Capitalization),
            "blank" => Some(Self::Blank),
            "date" => Some(Self::Date),
            "url" => Some(Self::Url),
            "count" => Some(Self::Count),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Tag written to reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Unique => "Unique",
            Self::Capitalization => "Capitalization",
            Self::Blank => "Blank",
            Self::Date => "Date",
            Self::Url => "URL",
            Self::Count => "Count",
            Self::Status => "Status",
        }
    }

    /// Cell fill color as `0xRRGGBB`.
    pub const fn color(&self) -> u32 {
        match self {
            Self::Numeric => 0xFFE6E6,
            Self::Unique => 0xFFB366,
            Self::Capitalization => 0xFFFF99,
            Self::Blank => 0xFFCCCC,
            Self::Date => 0xCCE5FF,
            Self::Url => 0xFF9999,
            Self::Count => 0xCC99FF,
            Self::Status => 0x99CCFF,
        }
    }

    /// Human name of the fill color.
    pub const fn color_name(&self) -> &'static str {
        match self {
            Self::Numeric => "light red",
            Self::Unique => "orange",
            Self::Capitalization => "light yellow",
            Self::Blank => "pink",
            Self::Date => "light blue",
            Self::Url => "red",
            Self::Count => "purple",
            Self::Status => "blue",
        }
    }

    /// Short description for listings.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Numeric => "Value must parse as a number",
            Self::Unique => "Value must not repeat across the dataset",
            Self::Capitalization => "Title casing of course names",
            Self::Blank => "Value must not be blank",
            Self::Date => "Dates must be YYYY-MM-DD",
            Self::Url => "URLs must be well formed and reachable",
            Self::Count => "Intake ids must pair one-to-one with start dates",
            Self::Status => "Value must be one of the allowed options",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_labels() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.label()), Some(*category));
        }
        assert_eq!(Category::parse(" url "), Some(Category::Url));
        assert_eq!(Category::parse("format"), None);
    }

    #[test]
    fn colors_are_distinct() {
        let mut colors: Vec<u32> = Category::all().iter().map(Category::color).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), Category::all().len());
    }
}
