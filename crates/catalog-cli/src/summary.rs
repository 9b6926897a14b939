use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::Category;

use crate::types::ValidateOutcome;

pub fn print_summary(outcome: &ValidateOutcome, show_errors: usize) {
    let report = &outcome.report;
    println!("Input: {}", outcome.input.display());
    if let Some(path) = &outcome.workbook {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &outcome.json {
        println!("JSON: {}", path.display());
    }

    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Rows"),
        header_cell("Validated"),
        header_cell("Cells Cleaned"),
        header_cell("Errors"),
        header_cell("Rows with Errors"),
        header_cell("Run"),
    ]);
    apply_table_style(&mut totals);
    for index in 0..5 {
        align_column(&mut totals, index, CellAlignment::Right);
    }
    let run = if report.is_complete() {
        Cell::new("complete").fg(Color::Green)
    } else {
        Cell::new("cancelled")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    };
    totals.add_row(vec![
        Cell::new(report.total_rows),
        Cell::new(report.rows_validated),
        Cell::new(outcome.cleaning.cells_changed()),
        count_cell(report.error_count(), Color::Red),
        count_cell(report.rows_with_errors().len(), Color::Red),
        run,
    ]);
    println!("{totals}");

    let counts = report.counts_by_category();
    if !counts.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Error Type"), header_cell("Count")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (category, count) in counts {
            table.add_row(vec![category_cell(category, category.label()), Cell::new(count)]);
        }
        println!();
        println!("{table}");
    }

    let unmapped: Vec<&str> = outcome
        .mapping
        .unmapped()
        .map(|entry| entry.source.as_str())
        .collect();
    if !unmapped.is_empty() {
        println!();
        println!("Not validated (unrecognized headers): {}", unmapped.join(", "));
    }

    print_error_table(outcome, show_errors);
}

fn print_error_table(outcome: &ValidateOutcome, limit: usize) {
    let records = &outcome.report.records;
    if records.is_empty() || limit == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Error Type"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records.iter().take(limit) {
        table.add_row(vec![
            Cell::new(record.row()),
            Cell::new(record.column()),
            category_cell(record.error_type(), record.error_type().label()),
            Cell::new(record.message()),
        ]);
    }
    println!();
    println!("Errors:");
    println!("{table}");
    if records.len() > limit {
        println!("... and {} more (see the report)", records.len() - limit);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string())
        .fg(Color::DarkGrey)
        .add_attribute(Attribute::Dim)
}

/// Text on the category's report fill color.
pub fn category_cell(category: Category, text: impl ToString) -> Cell {
    let rgb = category.color();
    Cell::new(text.to_string())
        .bg(Color::Rgb {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        })
        .fg(Color::Black)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
