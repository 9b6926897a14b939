use std::collections::HashMap;

use catalog_model::{CatalogRules, Category, Dataset, Field, FieldRules, UrlRules};
use catalog_validate::{
    CancellationToken, CourseIdIndex, CourseValidators, ProbeOutcome, UrlProbe, ValidationWorker,
    WorkerEvent, validate, validate_dataset,
};
use crossbeam_channel::{Receiver, bounded};
use proptest::prelude::*;
use url::Url;

/// Answers 404 for URLs containing "missing", 200 otherwise.
struct FakeProbe;

impl UrlProbe for FakeProbe {
    fn probe(&self, url: &Url) -> ProbeOutcome {
        if url.as_str().contains("missing") {
            ProbeOutcome::Status(404)
        } else {
            ProbeOutcome::Status(200)
        }
    }
}

/// Blocks each probe until the test releases it.
struct GatedProbe(Receiver<()>);

impl UrlProbe for GatedProbe {
    fn probe(&self, _url: &Url) -> ProbeOutcome {
        let _ = self.0.recv();
        ProbeOutcome::Status(200)
    }
}

fn fake_validators() -> CourseValidators {
    CourseValidators::new(FieldRules::default(), UrlRules::default(), Box::new(FakeProbe))
}

const HEADERS: [&str; 12] = [
    "Institution Id",
    "Course Id",
    "Course Type",
    "Degree Type",
    "Course Name",
    "L3 Tagging",
    "Course Intake Ids",
    "Course start date",
    "Course Level URL",
    "Course Status",
    "Show",
    "Study Mode",
];

fn valid_row(course_id: usize) -> Vec<String> {
    vec![
        "1001".to_string(),
        course_id.to_string(),
        "Undergraduate".to_string(),
        "Bachelor".to_string(),
        "Computer Science".to_string(),
        "Engineering".to_string(),
        format!("{course_id}01"),
        "2024-09-01".to_string(),
        format!("https://example.com/course{course_id}"),
        "Open".to_string(),
        "Yes".to_string(),
        "Full time".to_string(),
    ]
}

fn catalog(rows: Vec<Vec<String>>) -> Dataset {
    Dataset::from_rows(HEADERS.iter().map(|h| (*h).to_string()).collect(), rows)
}

#[test]
fn one_record_per_broken_rule() {
    let mut broken_url = valid_row(2);
    broken_url[8] = "https://example.com/missing".to_string();
    let mut bad_institution = valid_row(3);
    bad_institution[0] = "ABC".to_string();
    let mut blank_tag = valid_row(4);
    blank_tag[5] = String::new();

    let dataset = catalog(vec![valid_row(1), broken_url, bad_institution, blank_tag, valid_row(5)]);
    let report = validate(&dataset, &fake_validators());

    let summary: Vec<(usize, Field, Category)> = report
        .records
        .iter()
        .map(|r| (r.row(), r.column(), r.error_type()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (2, Field::CourseLevelUrl, Category::Url),
            (3, Field::InstitutionId, Category::Numeric),
            (4, Field::L3Tagging, Category::Blank),
        ]
    );
    assert_eq!(
        report.records[0].message(),
        "URL returns 404 (Not Found): https://example.com/missing"
    );
    assert!(report.is_complete());
}

#[test]
fn course_id_reports_numeric_before_unique() {
    let mut first = valid_row(1);
    first[1] = "A7".to_string();
    let mut second = valid_row(2);
    second[1] = "A7".to_string();
    let report = validate(&catalog(vec![first, second]), &fake_validators());
    assert_eq!(report.error_count(), 2);
    assert!(
        report
            .records
            .iter()
            .all(|r| r.column() == Field::CourseId && r.error_type() == Category::Numeric)
    );
}

#[test]
fn cancellation_keeps_partial_records() {
    let rows = (1..=6)
        .map(|id| {
            let mut row = valid_row(id);
            row[4] = "lowercase name".to_string();
            row
        })
        .collect();
    let dataset = catalog(rows);
    let cancel = CancellationToken::new();
    let mut seen = Vec::new();
    let report = validate_dataset(&dataset, &fake_validators(), &cancel, |progress| {
        seen.push(progress.row);
        if progress.row == 2 {
            cancel.cancel();
        }
    });

    assert_eq!(seen, vec![1, 2]);
    assert!(report.cancelled);
    assert!(!report.is_complete());
    assert_eq!(report.rows_validated, 2);
    assert_eq!(report.total_rows, 6);
    assert_eq!(report.error_count(), 2);
}

#[test]
fn worker_streams_every_row_then_finishes() {
    let mut broken = valid_row(2);
    broken[11] = "Online".to_string();
    let dataset = catalog(vec![valid_row(1), broken, valid_row(3)]);
    let worker = ValidationWorker::spawn(dataset, fake_validators()).unwrap();

    let mut rows = Vec::new();
    let mut finished = None;
    for event in worker.events().iter() {
        match event {
            WorkerEvent::Row { row, errors, .. } => rows.push((row, errors.len())),
            WorkerEvent::Finished(report) => {
                finished = Some(report);
                break;
            }
        }
    }
    let report = worker.join().unwrap();

    assert_eq!(rows, vec![(1, 0), (2, 1), (3, 0)]);
    assert_eq!(finished.map(|r| r.error_count()), Some(1));
    assert_eq!(report.records[0].error_type(), Category::Status);
}

#[test]
fn worker_cancel_stops_at_row_boundary() {
    let (release, gate) = bounded(0);
    let validators =
        CourseValidators::new(FieldRules::default(), UrlRules::default(), Box::new(GatedProbe(gate)));
    let dataset = catalog((1..=5).map(valid_row).collect());
    let worker = ValidationWorker::spawn(dataset, validators).unwrap();

    worker.cancel();
    drop(release);
    let report = worker.join().unwrap();

    assert!(report.cancelled);
    assert!(report.rows_validated <= 1);
}

#[test]
fn worker_stops_itself_at_error_limit() {
    let rows = (1..=6)
        .map(|id| {
            let mut row = valid_row(id);
            row[9] = "Pending".to_string();
            row
        })
        .collect();
    let worker =
        ValidationWorker::spawn_with_error_limit(catalog(rows), fake_validators(), Some(3)).unwrap();
    let report = worker.join().unwrap();

    assert!(report.cancelled);
    assert_eq!(report.rows_validated, 3);
    assert_eq!(report.error_count(), 3);
}

proptest! {
    #[test]
    fn duplicated_course_ids_all_flagged(ids in prop::collection::vec(0u8..6, 1..20)) {
        let dataset = Dataset::from_rows(
            vec!["Course Id".to_string()],
            ids.iter().map(|id| vec![id.to_string()]).collect(),
        );
        let mut counts: HashMap<u8, usize> = HashMap::new();
        for id in &ids {
            *counts.entry(*id).or_insert(0) += 1;
        }

        let report = validate(&dataset, &fake_validators());
        for (idx, id) in ids.iter().enumerate() {
            let flagged = report
                .errors_for_row(idx + 1)
                .any(|r| r.error_type() == Category::Unique);
            prop_assert_eq!(flagged, counts[id] > 1);
        }
    }

    #[test]
    fn field_checks_are_repeatable(value in "\\PC{0,30}", dates in "[0-9,-]{0,24}") {
        let dataset = Dataset::from_rows(
            vec!["Course start date".to_string()],
            vec![vec![dates]],
        );
        let row = dataset.row(0).unwrap();
        let validators = CourseValidators::format_only(&CatalogRules::default());
        let index = CourseIdIndex::from_values(["1", "1", "2"]);
        for field in Field::ALL {
            let first = validators.check_field(field, &value, &row, &index);
            let second = validators.check_field(field, &value, &row, &index);
            prop_assert_eq!(first, second);
        }
    }
}
