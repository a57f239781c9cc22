use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_model::Verdict;

use crate::commands::CheckOutcome;

pub fn print_summary(outcome: &CheckOutcome) {
    let report = &outcome.report;
    println!("File: {}", report.file_name);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    if !outcome.export_paths.is_empty() {
        println!("Exported: {} sheet(s)", outcome.export_paths.len());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Truncated"),
        header_cell("Issues"),
        header_cell("Duplicates"),
    ]);
    apply_sheet_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_rows = 0usize;
    for sheet in &outcome.sheets {
        total_rows += sheet.rows;
        table.add_row(vec![
            sheet_cell(&sheet.sheet),
            Cell::new(sheet.rows),
            truncated_cell(sheet.truncated),
            count_cell(sheet.finding_count, Color::Red),
            count_cell(sheet.duplicate_count, Color::Yellow),
        ]);
    }
    let stats = &report.stats;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(stats.effective_issue_count as usize, Color::Red)
            .add_attribute(Attribute::Bold),
        count_cell(stats.duplicate_row_count as usize, Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "Cells checked: {}  Rows checked for duplicates: {}",
        stats.cells_checked, stats.rows_checked_for_duplicates
    );
    println!(
        "Issue rate: {:.2}%  Clean rate: {:.2}%",
        stats.issue_rate_percent, stats.clean_rate_percent
    );
    match stats.verdict {
        Verdict::Pass => println!("Verdict: Pass (threshold: 95% clean)"),
        Verdict::Fail => println!("Verdict: Fail (threshold: 95% clean)"),
    }

    print_issue_table(outcome);
    print_duplicate_table(outcome);
}

fn print_issue_table(outcome: &CheckOutcome) {
    let has_issues = outcome
        .report
        .columns
        .iter()
        .any(|block| !block.findings.is_empty());
    if !has_issues {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Column"),
        header_cell("Row"),
        header_cell("Rule"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for block in &outcome.report.columns {
        if block.overridden {
            table.add_row(vec![
                sheet_cell(&block.sheet),
                Cell::new(&block.column),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new("all issues overridden").fg(Color::DarkGrey),
            ]);
            continue;
        }
        for finding in &block.findings {
            table.add_row(vec![
                sheet_cell(&finding.sheet),
                Cell::new(&finding.column),
                Cell::new(finding.row),
                Cell::new(finding.rule_kind.as_str()),
                value_cell(&finding.value),
                Cell::new(&finding.message),
            ]);
        }
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn print_duplicate_table(outcome: &CheckOutcome) {
    if outcome.report.duplicates.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Row"),
        header_cell("First Seen"),
        header_cell("Sample"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for duplicate in &outcome.report.duplicates {
        table.add_row(vec![
            sheet_cell(&duplicate.sheet),
            Cell::new(duplicate.row),
            Cell::new(duplicate.first_seen_row),
            Cell::new(&duplicate.sample),
        ]);
    }
    println!();
    println!("Duplicate rows:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_sheet_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn sheet_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn truncated_cell(truncated: bool) -> Cell {
    if truncated {
        Cell::new("yes")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("[Blank]")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
