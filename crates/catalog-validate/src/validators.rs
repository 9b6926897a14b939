//! Field rule dispatch.

use catalog_model::{CatalogRules, Category, ErrorRecord, Field, FieldRules, Row, UrlRules, Verdict};

use crate::checks::dates::check_start_date;
use crate::checks::identifiers::{check_course_id, check_institution_id};
use crate::checks::intake::check_intake_ids;
use crate::checks::names::check_course_name;
use crate::checks::required::check_required;
use crate::checks::status::{check_course_status, check_show, check_study_mode};
use crate::checks::urls::check_course_url;
use crate::context::CourseIdIndex;
use crate::error::Result;
use crate::probe::{FormatOnlyProbe, HttpProbe, UrlProbe};

/// Fields that carry a rule, in the order they are checked within a row.
pub const VALIDATED_FIELDS: [Field; 12] = [
    Field::InstitutionId,
    Field::CourseId,
    Field::CourseName,
    Field::L3Tagging,
    Field::DegreeType,
    Field::CourseType,
    Field::CourseStartDate,
    Field::CourseLevelUrl,
    Field::CourseIntakeIds,
    Field::Show,
    Field::CourseStatus,
    Field::StudyMode,
];

/// Categories a field's rule can fail with. Empty for fields without a rule.
pub fn rule_categories(field: Field) -> &'static [Category] {
    match field {
        Field::InstitutionId => &[Category::Numeric],
        Field::CourseId => &[Category::Numeric, Category::Unique],
        Field::CourseName => &[Category::Capitalization],
        Field::L3Tagging | Field::DegreeType | Field::CourseType => &[Category::Blank],
        Field::CourseStartDate => &[Category::Date],
        Field::CourseLevelUrl => &[Category::Url],
        Field::CourseIntakeIds => &[Category::Count],
        Field::Show | Field::CourseStatus | Field::StudyMode => &[Category::Status],
        Field::CourseLevelTuitionFees
        | Field::ApplicationFees
        | Field::ApplicationDeadlineDate
        | Field::PreviousEducation
        | Field::Commissionable => &[],
    }
}

/// The rule set for one validation run.
///
/// Rule tables are fixed at construction. The URL probe is the only part that
/// touches the outside world.
pub struct CourseValidators {
    fields: FieldRules,
    url: UrlRules,
    probe: Box<dyn UrlProbe>,
}

impl CourseValidators {
    pub fn new(fields: FieldRules, url: UrlRules, probe: Box<dyn UrlProbe>) -> Self {
        Self { fields, url, probe }
    }

    /// Validators that probe URLs over HTTP.
    pub fn with_http_probe(rules: &CatalogRules) -> Result<Self> {
        let probe = HttpProbe::new(&rules.url)?;
        Ok(Self::new(rules.fields.clone(), rules.url.clone(), Box::new(probe)))
    }

    /// Validators that check URL syntax only.
    pub fn format_only(rules: &CatalogRules) -> Self {
        Self::new(rules.fields.clone(), rules.url.clone(), Box::new(FormatOnlyProbe))
    }

    /// Check one value of `field`. `None` when the field has no rule.
    ///
    /// `row` supplies the paired start date for intake checks.
    pub fn check_field(
        &self,
        field: Field,
        value: &str,
        row: &Row<'_>,
        course_ids: &CourseIdIndex,
    ) -> Option<Verdict> {
        let verdict = match field {
            Field::InstitutionId => check_institution_id(value),
            Field::CourseId => check_course_id(value, course_ids),
            Field::CourseName => check_course_name(value, &self.fields.conjunctions),
            Field::L3Tagging | Field::DegreeType | Field::CourseType => {
                check_required(field, value)
            }
            Field::CourseStartDate => check_start_date(value),
            Field::CourseLevelUrl => check_course_url(value, &self.url, self.probe.as_ref()),
            Field::CourseIntakeIds => {
                let start_dates = row.field(Field::CourseStartDate)?;
                check_intake_ids(value, start_dates)
            }
            Field::Show => check_show(value, &self.fields.allowed_show_values),
            Field::CourseStatus => check_course_status(value, &self.fields.allowed_statuses),
            Field::StudyMode => check_study_mode(value, &self.fields.allowed_study_modes),
            Field::CourseLevelTuitionFees
            | Field::ApplicationFees
            | Field::ApplicationDeadlineDate
            | Field::PreviousEducation
            | Field::Commissionable => return None,
        };
        Some(verdict)
    }

    /// Run every applicable rule on one row; at most one record per field.
    pub fn validate_row(&self, row: &Row<'_>, course_ids: &CourseIdIndex) -> Vec<ErrorRecord> {
        VALIDATED_FIELDS
            .into_iter()
            .filter_map(|field| {
                let value = row.field(field)?;
                match self.check_field(field, value, row, course_ids)? {
                    Ok(()) => None,
                    Err(violation) => Some(ErrorRecord::new(row.number(), field, value, violation)),
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for CourseValidators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseValidators")
            .field("fields", &self.fields)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::Dataset;

    #[test]
    fn every_validated_field_has_categories() {
        for field in Field::ALL {
            assert_eq!(
                VALIDATED_FIELDS.contains(&field),
                !rule_categories(field).is_empty(),
                "{field}"
            );
        }
    }

    #[test]
    fn intake_is_skipped_without_start_date_column() {
        let dataset = Dataset::from_rows(
            vec!["Course Intake Ids".to_string()],
            vec![vec!["1,2".to_string()]],
        );
        let validators = CourseValidators::format_only(&CatalogRules::default());
        let row = dataset.row(0).unwrap();
        assert!(validators.validate_row(&row, &CourseIdIndex::default()).is_empty());
    }

    #[test]
    fn fields_without_rules_are_ignored() {
        let dataset = Dataset::from_rows(
            vec!["Application Fees".to_string(), "Notes".to_string()],
            vec![vec![String::new(), String::new()]],
        );
        let validators = CourseValidators::format_only(&CatalogRules::default());
        let row = dataset.row(0).unwrap();
        assert!(validators.validate_row(&row, &CourseIdIndex::default()).is_empty());
    }
}
