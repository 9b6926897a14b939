//! Rule tables for normalization, cleaning, and validation.
//!
//! [`CatalogRules::default()`] carries the built-in tables. A TOML rules file can
//! override any section; sections left out keep their defaults.
//!
//! ```toml
//! [fields]
//! allowed_statuses = ["Open", "Closed", "Waitlist"]
//!
//! [url]
//! timeout_secs = 5
//!
//! [[columns.variants]]
//! pattern = "Inst"
//! field = "Institution Id"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::field::Field;

/// Every rule table used by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogRules {
    pub columns: ColumnRules,
    pub cleaning: CleaningRules,
    pub fields: FieldRules,
    pub url: UrlRules,
}

impl CatalogRules {
    /// Parse rules from TOML text.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        let rules: Self = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        rules.check()?;
        Ok(rules)
    }

    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Reject tables that would make every value fail or never match.
    pub fn check(&self) -> Result<()> {
        if let Some(variant) = self
            .columns
            .variants
            .iter()
            .find(|variant| variant.pattern.trim().is_empty())
        {
            return Err(ConfigError::invalid(format!(
                "column variant for {} has an empty pattern",
                variant.field
            )));
        }
        for (name, values) in [
            ("fields.allowed_statuses", &self.fields.allowed_statuses),
            ("fields.allowed_show_values", &self.fields.allowed_show_values),
            ("fields.allowed_study_modes", &self.fields.allowed_study_modes),
        ] {
            if values.is_empty() {
                return Err(ConfigError::invalid(format!("{name} must not be empty")));
            }
        }
        if self
            .cleaning
            .study_modes
            .iter()
            .any(|mode| mode.keyword.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                "cleaning.study_modes keywords must not be empty",
            ));
        }
        if self.url.timeout_secs == 0 {
            return Err(ConfigError::invalid("url.timeout_secs must be positive"));
        }
        Ok(())
    }
}

/// Known abbreviations and typos of source headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnRules {
    /// Checked in order; the first matching pattern wins.
    pub variants: Vec<ColumnVariant>,
}

/// A header fragment and the canonical field it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVariant {
    pub pattern: String,
    pub field: Field,
}

impl ColumnVariant {
    pub fn new(pattern: impl Into<String>, field: Field) -> Self {
        Self {
            pattern: pattern.into(),
            field,
        }
    }
}

impl Default for ColumnRules {
    fn default() -> Self {
        // Longer "Course ..." fragments precede the bare "Course" fragment,
        // which would otherwise claim every truncated course header.
        Self {
            variants: vec![
                ColumnVariant::new("Instituti", Field::InstitutionId),
                ColumnVariant::new("Course I", Field::CourseId),
                ColumnVariant::new("Course TDegree", Field::DegreeType),
                ColumnVariant::new("Course sCourse", Field::CourseStartDate),
                ColumnVariant::new("Course LCourse SShow", Field::CourseLevelUrl),
                ColumnVariant::new("Course", Field::CourseName),
                ColumnVariant::new("L3 Taggi", Field::L3Tagging),
                ColumnVariant::new("LApplicati", Field::CourseLevelTuitionFees),
                ColumnVariant::new("Applicati", Field::ApplicationFees),
                ColumnVariant::new("Study M", Field::StudyMode),
                ColumnVariant::new("Previous", Field::PreviousEducation),
                ColumnVariant::new("Commissionable", Field::Commissionable),
            ],
        }
    }
}

/// Tables used by the value cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleaningRules {
    /// Cell texts (case-insensitive) treated as empty.
    pub null_markers: Vec<String>,
    /// Free-text study mode fragments and their canonical value.
    pub study_modes: Vec<StudyModeKeyword>,
    /// Status tokens searched for in compound URL cells.
    pub status_tokens: Vec<String>,
    /// Visibility tokens searched for in compound URL cells.
    pub show_tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyModeKeyword {
    pub keyword: String,
    pub value: String,
}

impl Default for CleaningRules {
    fn default() -> Self {
        Self {
            null_markers: vec!["NULL".to_string(), "NUL".to_string()],
            study_modes: vec![
                StudyModeKeyword {
                    keyword: "full".to_string(),
                    value: "Full time".to_string(),
                },
                StudyModeKeyword {
                    keyword: "part".to_string(),
                    value: "Part time".to_string(),
                },
            ],
            status_tokens: vec!["Open".to_string(), "Closed".to_string()],
            show_tokens: vec!["Yes".to_string(), "No".to_string()],
        }
    }
}

/// Allowed values and word lists used by the field validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldRules {
    pub allowed_statuses: Vec<String>,
    pub allowed_show_values: Vec<String>,
    pub allowed_study_modes: Vec<String>,
    /// Words that must stay lowercase after the first word of a course name.
    pub conjunctions: Vec<String>,
}

const CONJUNCTIONS: &[&str] = &[
    "and", "with", "by", "of", "the", "in", "on", "at", "to", "for", "from", "up", "about",
    "into", "through", "during", "before", "after", "above", "below", "between", "among",
    "within", "without", "against", "toward", "towards", "upon", "under", "over", "across",
];

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            allowed_statuses: vec!["Open".to_string(), "Closed".to_string()],
            allowed_show_values: vec!["Yes".to_string(), "No".to_string()],
            allowed_study_modes: vec!["Full time".to_string(), "Part time".to_string()],
            conjunctions: CONJUNCTIONS.iter().map(|word| (*word).to_string()).collect(),
        }
    }
}

/// URL reachability probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlRules {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// HTTP statuses reported as broken links. Anything else counts as reachable.
    pub failing_statuses: Vec<u16>,
}

impl Default for UrlRules {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            failing_statuses: vec![404, 410, 500, 502, 503, 504],
        }
    }
}
