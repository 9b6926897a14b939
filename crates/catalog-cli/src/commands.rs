use std::io::{self, IsTerminal};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, Color, Table};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span};

use catalog_ingest::read_dataset;
use catalog_map::{ColumnNormalizer, MatchKind};
use catalog_model::{CatalogRules, Category, Dataset, Field, ValidationReport};
use catalog_report::{default_report_name, write_json, write_workbook};
use catalog_transform::ValueCleaner;
use catalog_validate::{
    CourseValidators, VALIDATED_FIELDS, ValidationWorker, WorkerEvent, rule_categories,
};

use crate::cli::{ColumnsArgs, ValidateArgs};
use crate::logging::redact_value;
use crate::summary::{apply_table_style, category_cell, dim_cell, header_cell};
use crate::types::ValidateOutcome;

/// Built-in rules, or the given TOML file layered over them.
pub fn load_rules(path: Option<&Path>) -> Result<CatalogRules> {
    match path {
        Some(path) => CatalogRules::load(path)
            .with_context(|| format!("load rules from {}", path.display())),
        None => Ok(CatalogRules::default()),
    }
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateOutcome> {
    let span = info_span!("validate_sheet", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rules = load_rules(args.rules.as_deref())?;
    let mut dataset = read_dataset(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let mapping = ColumnNormalizer::new(&rules.columns).apply(&mut dataset);
    let cleaning = ValueCleaner::new(rules.cleaning.clone()).clean(&mut dataset);

    let validators = if args.skip_url_check {
        CourseValidators::format_only(&rules)
    } else {
        CourseValidators::with_http_probe(&rules).context("build URL client")?
    };
    let progress = progress_bar(dataset.len(), !args.no_progress);
    let report = run_worker(dataset.clone(), validators, args.max_errors, &progress)?;

    let workbook = if args.no_report {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_workbook_path(&args.input));
        write_workbook(&path, &dataset, &report)
            .with_context(|| format!("write report {}", path.display()))?;
        Some(path)
    };
    let json = match &args.json {
        Some(path) => {
            write_json(path, &report).with_context(|| format!("write {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    info!(
        rows = report.total_rows,
        errors = report.error_count(),
        complete = report.is_complete(),
        duration_ms = start.elapsed().as_millis(),
        "validate command finished"
    );
    Ok(ValidateOutcome {
        input: args.input.clone(),
        workbook,
        json,
        mapping,
        cleaning,
        report,
    })
}

/// Run the worker and feed its row events to the progress bar.
fn run_worker(
    dataset: Dataset,
    validators: CourseValidators,
    max_errors: Option<NonZeroUsize>,
    progress: &ProgressBar,
) -> Result<ValidationReport> {
    let worker = ValidationWorker::spawn_with_error_limit(
        dataset,
        validators,
        max_errors.map(NonZeroUsize::get),
    )
    .context("start validation")?;
    for event in worker.events() {
        match event {
            WorkerEvent::Row {
                row,
                errors,
                total_errors,
                ..
            } => {
                progress.set_position(row as u64);
                progress.set_message(format!("{total_errors} errors"));
                for record in &errors {
                    debug!(
                        row = record.row(),
                        column = %record.column(),
                        error_type = %record.error_type(),
                        value = redact_value(record.value()),
                        "cell failed"
                    );
                }
            }
            WorkerEvent::Finished(report) => {
                if report.cancelled {
                    info!(
                        total_errors = report.error_count(),
                        rows_validated = report.rows_validated,
                        "error limit reached, validation stopped"
                    );
                }
                break;
            }
        }
    }
    progress.finish_and_clear();
    worker.join().context("validation worker")
}

fn progress_bar(rows: usize, visible: bool) -> ProgressBar {
    if !visible || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(rows as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} rows {msg}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

fn default_workbook_path(input: &Path) -> PathBuf {
    let name = default_report_name(&Local::now());
    match input.parent() {
        Some(dir) => dir.join(name),
        None => name,
    }
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let rules = load_rules(args.rules.as_deref())?;
    let dataset = read_dataset(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let mapping = ColumnNormalizer::new(&rules.columns)
        .map_headers(dataset.headers().iter().map(String::as_str));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source Header"),
        header_cell("Field"),
        header_cell("Matched By"),
        header_cell("Suggestion"),
    ]);
    apply_table_style(&mut table);
    for entry in &mapping.entries {
        let field = match entry.field {
            Some(field) => Cell::new(field.name()),
            None => Cell::new("unmapped").fg(Color::Yellow),
        };
        let (matched_by, suggestion) = match &entry.kind {
            MatchKind::Exact => (Cell::new("exact"), dim_cell("-")),
            MatchKind::Variant { pattern } => (Cell::new(format!("\"{pattern}\"")), dim_cell("-")),
            MatchKind::Unmapped { suggestion } => (
                dim_cell("-"),
                suggestion.map_or_else(
                    || dim_cell("-"),
                    |s| Cell::new(format!("{} ({:.2})", s.field, s.score)),
                ),
            ),
        };
        table.add_row(vec![Cell::new(&entry.source), field, matched_by, suggestion]);
    }
    println!("{table}");

    let missing = mapping.missing_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().copied().map(Field::name).collect();
        println!("Fields without a column: {}", names.join(", "));
    }
    for (field, sources) in mapping.duplicates() {
        println!("{field} claimed by: {} (first is validated)", sources.join(", "));
    }
    Ok(())
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Validated"),
        header_cell("Error Types"),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        let categories = rule_categories(field);
        let validated = if VALIDATED_FIELDS.contains(&field) {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        let types = if categories.is_empty() {
            dim_cell("-")
        } else {
            let labels: Vec<&str> = categories.iter().map(Category::label).collect();
            category_cell(categories[0], labels.join(", "))
        };
        table.add_row(vec![Cell::new(field.name()), validated, types]);
    }
    println!("{table}");
    Ok(())
}
