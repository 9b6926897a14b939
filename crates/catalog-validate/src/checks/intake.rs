//! Course Intake Ids against Course start date.

use std::collections::HashSet;

use catalog_model::{Category, Verdict, Violation};

use super::is_blank;

fn components(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// One intake id per start date, no repeated intake ids.
pub fn check_intake_ids(intake_ids: &str, start_dates: &str) -> Verdict {
    if is_blank(intake_ids) || is_blank(start_dates) {
        return Err(Violation::new(
            Category::Count,
            "Course Intake IDs and Course start date cannot be blank",
        ));
    }
    let intakes = components(intake_ids);
    let dates = components(start_dates);
    if intakes.len() != dates.len() {
        return Err(Violation::new(
            Category::Count,
            format!(
                "Intake IDs count ({}) must match start dates count ({})",
                intakes.len(),
                dates.len()
            ),
        ));
    }
    let mut seen = HashSet::with_capacity(intakes.len());
    if !intakes.iter().all(|id| seen.insert(*id)) {
        return Err(Violation::new(Category::Count, "Course Intake IDs must be unique"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_must_match() {
        let err = check_intake_ids("1,2,3", "2024-09-01").unwrap_err();
        assert_eq!(err.category, Category::Count);
        assert_eq!(err.message, "Intake IDs count (3) must match start dates count (1)");
        assert!(check_intake_ids("1, 2", "2024-09-01,2025-01-15").is_ok());
    }

    #[test]
    fn duplicate_intakes_are_rejected() {
        let err = check_intake_ids("7,7", "2024-09-01,2025-01-15").unwrap_err();
        assert_eq!(err.message, "Course Intake IDs must be unique");
    }

    #[test]
    fn either_side_blank_is_rejected() {
        assert!(check_intake_ids("", "2024-09-01").is_err());
        assert!(check_intake_ids("1", " ").is_err());
    }
}
