use catalog_model::{Dataset, Field};
use catalog_transform::ValueCleaner;
use proptest::prelude::*;

const HEADERS: [&str; 4] = ["Course start date", "Study Mode", "Course Level URL", "Application Fees"];

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NULL,NUL".to_string()),
        Just("nul".to_string()),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}[0-9]{0,4}",
        "(Full|full|Part|part)[ -]?(Time|time)?",
        "https://example\\.com/[a-z]{1,6}(,(Open|Closed)?(Yes|No)?)?",
        "[ -~]{0,16}",
    ]
}

fn dataset(rows: Vec<Vec<String>>) -> Dataset {
    Dataset::from_rows(HEADERS.iter().map(|h| (*h).to_string()).collect(), rows)
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(rows in prop::collection::vec(prop::collection::vec(cell(), 4), 0..12)) {
        let cleaner = ValueCleaner::default();
        let mut data = dataset(rows);
        cleaner.clean(&mut data);
        let once = data.clone();
        let second = cleaner.clean(&mut data);
        prop_assert_eq!(&data, &once);
        prop_assert_eq!(second.cells_changed(), 0);
    }

    #[test]
    fn cleaning_keeps_row_count(rows in prop::collection::vec(prop::collection::vec(cell(), 4), 0..12)) {
        let mut data = dataset(rows);
        let before = data.len();
        ValueCleaner::default().clean(&mut data);
        prop_assert_eq!(data.len(), before);
        prop_assert!(data.has_column(Field::CourseStatus.name()));
        prop_assert!(data.has_column(Field::Show.name()));
    }
}

#[test]
fn sample_row_is_cleaned() {
    let mut data = dataset(vec![vec![
        "2024-09-015720".to_string(),
        "Full Time".to_string(),
        "https://www.example.com/course1,Open Yes".to_string(),
        "NULL,NUL".to_string(),
    ]]);
    let report = ValueCleaner::default().clean(&mut data);
    let row = data.row(0).unwrap();
    assert_eq!(row.field(Field::CourseStartDate), Some("2024-09-01"));
    assert_eq!(row.field(Field::StudyMode), Some("Full time"));
    assert_eq!(row.field(Field::CourseLevelUrl), Some("https://www.example.com/course1"));
    assert_eq!(row.field(Field::CourseStatus), Some("Open"));
    assert_eq!(row.field(Field::Show), Some("Yes"));
    assert_eq!(row.field(Field::ApplicationFees), Some(""));
    assert_eq!(report.cells_changed(), 4);
}
