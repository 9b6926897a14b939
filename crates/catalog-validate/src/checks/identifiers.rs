//! Institution Id and Course Id.

use catalog_model::{Category, Verdict, Violation};

use super::{is_blank, is_numeric};
use crate::context::CourseIdIndex;

pub fn check_institution_id(value: &str) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Numeric, "Institution Id cannot be blank"));
    }
    if !is_numeric(value) {
        return Err(Violation::new(Category::Numeric, "Institution Id must be numeric"));
    }
    Ok(())
}

/// Numeric first, then uniqueness across the whole column.
pub fn check_course_id(value: &str, index: &CourseIdIndex) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Numeric, "Course Id cannot be blank"));
    }
    if !is_numeric(value) {
        return Err(Violation::new(Category::Numeric, "Course Id must be numeric"));
    }
    if index.count(value) > 1 {
        return Err(Violation::new(Category::Unique, "Course Id must be unique"));
    }
    Ok(())
}
