use std::fs;

use catalog_model::{
    CatalogRules, Category, ConfigError, ErrorRecord, Field, ValidationReport, Violation,
};

#[test]
fn error_record_serializes_with_display_names() {
    let record = ErrorRecord::new(
        3,
        Field::CourseLevelUrl,
        "https://example.com/gone",
        Violation::new(Category::Url, "URL returns 404 (Not Found): https://example.com/gone"),
    );
    insta::assert_json_snapshot!(record, @r#"
    {
      "row": 3,
      "column": "Course Level URL",
      "error_type": "URL",
      "message": "URL returns 404 (Not Found): https://example.com/gone",
      "value": "https://example.com/gone"
    }
    "#);
}

#[test]
fn report_counts_rows_and_categories() {
    let mut report = ValidationReport::new(4);
    report.rows_validated = 4;
    report.records.push(ErrorRecord::new(
        1,
        Field::CourseId,
        "",
        Violation::new(Category::Numeric, "Course Id cannot be blank"),
    ));
    report.records.push(ErrorRecord::new(
        1,
        Field::Show,
        "",
        Violation::new(Category::Blank, "Show field cannot be blank"),
    ));
    report.records.push(ErrorRecord::new(
        4,
        Field::CourseName,
        "",
        Violation::new(Category::Blank, "Course Name cannot be blank"),
    ));

    assert!(report.is_complete());
    assert_eq!(report.error_count(), 3);
    assert_eq!(report.rows_with_errors().into_iter().collect::<Vec<_>>(), vec![1, 4]);
    let counts = report.counts_by_category();
    assert_eq!(counts.get(&Category::Blank), Some(&2));
    assert_eq!(counts.get(&Category::Numeric), Some(&1));
    assert_eq!(counts.get(&Category::Url), None);
    assert_eq!(report.errors_for_row(1).count(), 2);
}

#[test]
fn rules_file_overrides_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
[fields]
allowed_statuses = ["Open", "Closed", "Waitlist"]

[[columns.variants]]
pattern = "Inst"
field = "Institution Id"
"#,
    )
    .unwrap();

    let rules = CatalogRules::load(&path).unwrap();
    assert_eq!(rules.fields.allowed_statuses.len(), 3);
    assert_eq!(rules.columns.variants.len(), 1);
    assert_eq!(rules.columns.variants[0].field, Field::InstitutionId);
    assert_eq!(rules.url.timeout_secs, 10);
}

#[test]
fn unknown_field_name_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        "[[columns.variants]]\npattern = \"X\"\nfield = \"Course Colour\"\n",
    )
    .unwrap();

    let err = CatalogRules::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn missing_rules_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogRules::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
