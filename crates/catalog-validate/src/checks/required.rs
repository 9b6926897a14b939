//! Fields that only need a value.

use catalog_model::{Category, Field, Verdict, Violation};

use super::is_blank;

/// Fails with a `Blank` violation when `value` is empty or whitespace.
pub fn check_required(field: Field, value: &str) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(
            Category::Blank,
            format!("{} must not be blank", field.name()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_names_the_field() {
        let err = check_required(Field::L3Tagging, " ").unwrap_err();
        assert_eq!(err.category, Category::Blank);
        assert_eq!(err.message, "L3 Tagging must not be blank");
        assert!(check_required(Field::DegreeType, "Bachelor").is_ok());
    }
}
