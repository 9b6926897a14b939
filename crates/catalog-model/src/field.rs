//! Canonical course catalog fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the canonical column names of a course catalog sheet.
///
/// Serialized by its display name (`"Institution Id"`, `"Course start date"`, ...)
/// so rule files and JSON reports use the same spelling as the source sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Institution Id")]
    InstitutionId,
    #[serde(rename = "Course Id")]
    CourseId,
    #[serde(rename = "Course Type")]
    CourseType,
    #[serde(rename = "Degree Type")]
    DegreeType,
    #[serde(rename = "Course Name")]
    CourseName,
    #[serde(rename = "L3 Tagging")]
    L3Tagging,
    #[serde(rename = "Course Intake Ids")]
    CourseIntakeIds,
    #[serde(rename = "Course start date")]
    CourseStartDate,
    #[serde(rename = "Course Level Tuition Fees")]
    CourseLevelTuitionFees,
    #[serde(rename = "Application Fees")]
    ApplicationFees,
    #[serde(rename = "Application Deadline Date")]
    ApplicationDeadlineDate,
    #[serde(rename = "Course Level URL")]
    CourseLevelUrl,
    #[serde(rename = "Course Status")]
    CourseStatus,
    #[serde(rename = "Show")]
    Show,
    #[serde(rename = "Study Mode")]
    StudyMode,
    #[serde(rename = "Previous Education")]
    PreviousEducation,
    #[serde(rename = "Commissionable")]
    Commissionable,
}

impl Field {
    /// All canonical fields in sheet order.
    pub const ALL: [Field; 17] = [
        Self::InstitutionId,
        Self::CourseId,
        Self::CourseType,
        Self::DegreeType,
        Self::CourseName,
        Self::L3Tagging,
        Self::CourseIntakeIds,
        Self::CourseStartDate,
        Self::CourseLevelTuitionFees,
        Self::ApplicationFees,
        Self::ApplicationDeadlineDate,
        Self::CourseLevelUrl,
        Self::CourseStatus,
        Self::Show,
        Self::StudyMode,
        Self::PreviousEducation,
        Self::Commissionable,
    ];

    /// Canonical header text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::InstitutionId => "Institution Id",
            Self::CourseId => "Course Id",
            Self::CourseType => "Course Type",
            Self::DegreeType => "Degree Type",
            Self::CourseName => "Course Name",
            Self::L3Tagging => "L3 Tagging",
            Self::CourseIntakeIds => "Course Intake Ids",
            Self::CourseStartDate => "Course start date",
            Self::CourseLevelTuitionFees => "Course Level Tuition Fees",
            Self::ApplicationFees => "Application Fees",
            Self::ApplicationDeadlineDate => "Application Deadline Date",
            Self::CourseLevelUrl => "Course Level URL",
            Self::CourseStatus => "Course Status",
            Self::Show => "Show",
            Self::StudyMode => "Study Mode",
            Self::PreviousEducation => "Previous Education",
            Self::Commissionable => "Commissionable",
        }
    }

    /// Exact (case-sensitive) lookup by canonical header text.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
