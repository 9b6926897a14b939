//! Closed-vocabulary fields: Show, Course Status, Study Mode.

use catalog_model::{Category, Verdict, Violation};

use super::is_blank;

fn one_of(allowed: &[String]) -> String {
    allowed.join(", ")
}

pub fn check_show(value: &str, allowed: &[String]) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Status, "Show field cannot be blank"));
    }
    if !allowed.iter().any(|v| v == value.trim()) {
        return Err(Violation::new(
            Category::Status,
            format!("Show must be one of: {}", one_of(allowed)),
        ));
    }
    Ok(())
}

/// A single status, or a comma-separated list where every entry is allowed.
pub fn check_course_status(value: &str, allowed: &[String]) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Status, "Course Status cannot be blank"));
    }
    let value = value.trim();
    if value.contains(',') {
        let invalid: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|status| !allowed.iter().any(|v| v == status))
            .collect();
        if !invalid.is_empty() {
            return Err(Violation::new(
                Category::Status,
                format!(
                    "Invalid status values: {}. Must be one of: {}",
                    invalid.join(", "),
                    one_of(allowed)
                ),
            ));
        }
    } else if !allowed.iter().any(|v| v == value) {
        return Err(Violation::new(
            Category::Status,
            format!("Course Status must be one of: {}", one_of(allowed)),
        ));
    }
    Ok(())
}

pub fn check_study_mode(value: &str, allowed: &[String]) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Status, "Study Mode cannot be blank"));
    }
    if !allowed.iter().any(|v| v == value.trim()) {
        return Err(Violation::new(
            Category::Status,
            format!("Study Mode must be one of: {}", one_of(allowed)),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::FieldRules;

    #[test]
    fn show_is_exact() {
        let rules = FieldRules::default();
        assert!(check_show("Yes", &rules.allowed_show_values).is_ok());
        assert_eq!(
            check_show("yes", &rules.allowed_show_values).unwrap_err().message,
            "Show must be one of: Yes, No"
        );
    }

    #[test]
    fn status_lists_name_invalid_entries() {
        let allowed = FieldRules::default().allowed_statuses;
        assert!(check_course_status("Open, Closed", &allowed).is_ok());
        assert_eq!(
            check_course_status("Open, Ope", &allowed).unwrap_err().message,
            "Invalid status values: Ope. Must be one of: Open, Closed"
        );
        assert_eq!(
            check_course_status("Pending", &allowed).unwrap_err().message,
            "Course Status must be one of: Open, Closed"
        );
    }

    #[test]
    fn study_mode_is_exact() {
        let allowed = FieldRules::default().allowed_study_modes;
        assert!(check_study_mode("Part time", &allowed).is_ok());
        assert!(check_study_mode("Full Time", &allowed).is_err());
        assert_eq!(
            check_study_mode("", &allowed).unwrap_err().message,
            "Study Mode cannot be blank"
        );
    }
}
