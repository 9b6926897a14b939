//! Course Name capitalization.

use catalog_model::{Category, Verdict, Violation};

use super::is_blank;

/// Name must start uppercase; listed conjunctions after the first word must not.
///
/// Stops at the first offending word.
pub fn check_course_name(value: &str, conjunctions: &[String]) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Capitalization, "Course Name cannot be blank"));
    }
    let name = value.trim();
    if !name.chars().next().is_some_and(char::is_uppercase) {
        return Err(Violation::new(
            Category::Capitalization,
            "Course Name must start with capital letter",
        ));
    }
    for word in name.split_whitespace().skip(1) {
        let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
        if starts_upper && conjunctions.iter().any(|c| c.eq_ignore_ascii_case(word)) {
            return Err(Violation::new(
                Category::Capitalization,
                format!("Conjunction \"{word}\" should be lowercase"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::FieldRules;

    fn check(value: &str) -> Verdict {
        check_course_name(value, &FieldRules::default().conjunctions)
    }

    #[test]
    fn lowercase_start_is_rejected() {
        let err = check("computer science").unwrap_err();
        assert_eq!(err.message, "Course Name must start with capital letter");
        assert!(check("3D Design").is_err());
    }

    #[test]
    fn capitalized_conjunction_is_named() {
        let err = check("Business And Management").unwrap_err();
        assert_eq!(err.category, Category::Capitalization);
        assert_eq!(err.message, "Conjunction \"And\" should be lowercase");
    }

    #[test]
    fn first_offending_conjunction_wins() {
        let err = check("Master Of Arts In Design").unwrap_err();
        assert_eq!(err.message, "Conjunction \"Of\" should be lowercase");
    }

    #[test]
    fn valid_names_pass() {
        assert!(check("Engineering with Technology").is_ok());
        assert!(check("The Art of War").is_ok());
        assert!(check("Law").is_ok());
    }
}
