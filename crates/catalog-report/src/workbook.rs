//! Highlighted XLSX report.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Instant;

use catalog_model::{Category, Dataset, ValidationReport};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::error::{ReportError, Result};

pub const DATA_SHEET: &str = "Validated Data";
pub const SUMMARY_SHEET: &str = "Validation Summary";
pub const DETAILS_SHEET: &str = "Error Details";
pub const ERROR_COUNT_HEADER: &str = "Error Count";

/// Header row fill.
pub const HEADER_COLOR: u32 = 0x366092;
/// Error count fill for rows with at least one error.
const ERROR_COUNT_COLOR: u32 = 0xFF0000;
/// Widest auto-fitted column, in characters.
pub const MAX_COLUMN_WIDTH: usize = 50;

const DETAIL_HEADERS: [&str; 5] = ["Row", "Column", "Error Type", "Message", "Value"];

/// Write the cleaned dataset and its validation report to an XLSX workbook.
pub fn write_workbook(path: &Path, dataset: &Dataset, report: &ValidationReport) -> Result<()> {
    let start = Instant::now();
    let xlsx_error = |source| ReportError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    write_data_sheet(workbook.add_worksheet(), dataset, report, &styles).map_err(xlsx_error)?;
    write_summary_sheet(workbook.add_worksheet(), report, &styles).map_err(xlsx_error)?;
    write_details_sheet(workbook.add_worksheet(), report, &styles).map_err(xlsx_error)?;
    workbook.save(path).map_err(xlsx_error)?;

    info!(
        path = %path.display(),
        rows = dataset.len(),
        errors = report.error_count(),
        duration_ms = start.elapsed().as_millis(),
        "workbook written"
    );
    Ok(())
}

struct Styles {
    header: Format,
    cell: Format,
    title: Format,
    bold: Format,
    error_count: Format,
    categories: HashMap<Category, Format>,
}

impl Styles {
    fn new() -> Self {
        let cell = Format::new().set_border(FormatBorder::Thin);
        let header = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_COLOR))
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);
        let error_count = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(ERROR_COUNT_COLOR))
            .set_border(FormatBorder::Thin);
        let categories = Category::all()
            .iter()
            .map(|category| {
                let format = cell
                    .clone()
                    .set_bold()
                    .set_background_color(Color::RGB(category.color()));
                (*category, format)
            })
            .collect();
        Self {
            header,
            cell,
            title: Format::new().set_bold().set_font_size(14),
            bold: Format::new().set_bold(),
            error_count,
            categories,
        }
    }

    fn category(&self, category: Category) -> &Format {
        self.categories.get(&category).unwrap_or(&self.cell)
    }
}

/// Auto-fit widths: longest text plus padding, capped.
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn observe(&mut self, col: usize, text: &str) {
        if self.0.len() <= col {
            self.0.resize(col + 1, 0);
        }
        self.0[col] = self.0[col].max(text.chars().count());
    }

    fn apply(&self, sheet: &mut Worksheet) -> std::result::Result<(), XlsxError> {
        for (col, longest) in self.0.iter().enumerate() {
            let width = (longest + 2).min(MAX_COLUMN_WIDTH);
            sheet.set_column_width(to_col(col), width as f64)?;
        }
        Ok(())
    }
}

/// Sheet row index; out-of-range values are rejected by the writer.
fn to_row(idx: usize) -> u32 {
    u32::try_from(idx).unwrap_or(u32::MAX)
}

fn to_col(idx: usize) -> u16 {
    u16::try_from(idx).unwrap_or(u16::MAX)
}

fn write_data_sheet(
    sheet: &mut Worksheet,
    dataset: &Dataset,
    report: &ValidationReport,
    styles: &Styles,
) -> std::result::Result<(), XlsxError> {
    sheet.set_name(DATA_SHEET)?;
    let mut widths = ColumnWidths::new();
    let count_col = dataset.width();

    for (col, header) in dataset.headers().iter().enumerate() {
        sheet.write_string_with_format(0, to_col(col), header, &styles.header)?;
        widths.observe(col, header);
    }
    sheet.write_string_with_format(0, to_col(count_col), ERROR_COUNT_HEADER, &styles.header)?;
    widths.observe(count_col, ERROR_COUNT_HEADER);

    // (0-based row, column) -> category of the error reported for that cell.
    let mut highlights: HashMap<(usize, usize), Category> = HashMap::new();
    let mut row_errors: HashMap<usize, usize> = HashMap::new();
    for record in &report.records {
        let row_idx = record.row().saturating_sub(1);
        *row_errors.entry(row_idx).or_insert(0) += 1;
        if let Some(col) = dataset.column_index(record.column().name()) {
            highlights.insert((row_idx, col), record.error_type());
        }
    }

    for row in dataset.rows() {
        let sheet_row = to_row(row.index() + 1);
        for (col, value) in row.values().iter().enumerate() {
            let format = highlights
                .get(&(row.index(), col))
                .map_or(&styles.cell, |category| styles.category(*category));
            sheet.write_string_with_format(sheet_row, to_col(col), value, format)?;
            widths.observe(col, value);
        }
        let count = row_errors.get(&row.index()).copied().unwrap_or(0);
        let format = if count > 0 {
            &styles.error_count
        } else {
            &styles.cell
        };
        sheet.write_number_with_format(sheet_row, to_col(count_col), count as f64, format)?;
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    report: &ValidationReport,
    styles: &Styles,
) -> std::result::Result<(), XlsxError> {
    sheet.set_name(SUMMARY_SHEET)?;
    sheet.write_string_with_format(0, 0, SUMMARY_SHEET, &styles.title)?;

    let run_status = if report.is_complete() {
        "Complete".to_string()
    } else {
        format!(
            "Incomplete (cancelled after {} of {} rows)",
            report.rows_validated, report.total_rows
        )
    };
    let totals = [
        ("Total Rows:", report.total_rows),
        ("Total Errors:", report.error_count()),
        ("Rows with Errors:", report.rows_with_errors().len()),
    ];
    let mut row = 2u32;
    for (label, value) in totals {
        sheet.write_string(row, 0, label)?;
        sheet.write_number(row, 1, value as f64)?;
        row += 1;
    }
    sheet.write_string(row, 0, "Run Status:")?;
    sheet.write_string(row, 1, &run_status)?;

    row += 2;
    sheet.write_string_with_format(row, 0, "Error Breakdown by Type:", &styles.bold)?;
    let counts: BTreeMap<Category, usize> = report.counts_by_category();
    for (category, count) in &counts {
        row += 1;
        sheet.write_string_with_format(row, 0, category.label(), styles.category(*category))?;
        sheet.write_number(row, 1, *count as f64)?;
    }

    sheet.set_column_width(0, 26)?;
    sheet.set_column_width(1, (run_status.chars().count() + 2).min(MAX_COLUMN_WIDTH) as f64)?;
    Ok(())
}

fn write_details_sheet(
    sheet: &mut Worksheet,
    report: &ValidationReport,
    styles: &Styles,
) -> std::result::Result<(), XlsxError> {
    sheet.set_name(DETAILS_SHEET)?;
    let mut widths = ColumnWidths::new();
    for (col, header) in DETAIL_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, to_col(col), *header, &styles.header)?;
        widths.observe(col, header);
    }

    for (idx, record) in report.records.iter().enumerate() {
        let row = to_row(idx + 1);
        let row_number = record.row().to_string();
        sheet.write_number_with_format(row, 0, record.row() as f64, &styles.cell)?;
        sheet.write_string_with_format(row, 1, record.column().name(), &styles.cell)?;
        sheet.write_string_with_format(
            row,
            2,
            record.error_type().label(),
            styles.category(record.error_type()),
        )?;
        sheet.write_string_with_format(row, 3, record.message(), &styles.cell)?;
        sheet.write_string_with_format(row, 4, record.value(), &styles.cell)?;

        widths.observe(0, &row_number);
        widths.observe(1, record.column().name());
        widths.observe(2, record.error_type().label());
        widths.observe(3, record.message());
        widths.observe(4, record.value());
    }

    widths.apply(sheet)?;
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}
