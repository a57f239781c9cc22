//! The exported summary worksheet.
//!
//! The row layout (overall stats block, then the detailed custom issues
//! table, then the duplicate row table) is a contract consumers compare
//! against byte-for-byte, so every label below is load-bearing.

use dq_model::{Cell, CLEAN_RATE_PASS_THRESHOLD, Sheet};

use crate::summary::SummaryReport;

/// Name of the appended worksheet.
pub const SUMMARY_SHEET_NAME: &str = "Validation Summary";

const ISSUE_TABLE_HEADER: [&str; 7] = [
    "Sheet",
    "Column",
    "Rule Type",
    "Failure Message",
    "Value",
    "Row #",
    "Overridden",
];

const DUPLICATE_TABLE_HEADER: [&str; 4] = [
    "Sheet",
    "Duplicate Row #",
    "First Seen At Row #",
    "Sample Data (First 3 Cells)",
];

/// Render the report as the fixed-layout worksheet.
pub fn summary_sheet(report: &SummaryReport) -> Sheet {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let stats = &report.stats;

    rows.push(vec![Cell::from("Data Quality Summary Report")]);
    rows.push(Vec::new());
    rows.push(vec![Cell::from("Overall Statistics")]);
    rows.push(label_value("File:", Cell::Text(report.file_name.clone())));
    rows.push(label_value(
        "Total Cells Processed (for custom rules):",
        Cell::Number(stats.cells_checked as f64),
    ));
    rows.push(label_value(
        "Total Rows Processed (for duplicates):",
        Cell::Number(stats.rows_checked_for_duplicates as f64),
    ));
    rows.push(label_value(
        "Total Custom Validation Issues (effective):",
        Cell::Number(stats.effective_issue_count as f64),
    ));
    rows.push(label_value(
        "Total Duplicate Rows Found:",
        Cell::Number(stats.duplicate_row_count as f64),
    ));
    rows.push(label_value(
        "Total Effective Issues (Custom + Duplicates):",
        Cell::Number(stats.total_effective_issues() as f64),
    ));
    rows.push(label_value(
        "Issue Rate (approximate):",
        Cell::Text(format!("{:.2}%", stats.issue_rate_percent)),
    ));
    rows.push(label_value(
        "Clean Rate (approximate):",
        Cell::Text(format!("{:.2}%", stats.clean_rate_percent)),
    ));
    rows.push(label_value(
        "Status:",
        Cell::Text(format!(
            "{} (Threshold: {}% clean)",
            stats.verdict.as_str(),
            CLEAN_RATE_PASS_THRESHOLD
        )),
    ));
    rows.push(Vec::new());

    rows.push(vec![Cell::from("Detailed Custom Issues by Column")]);
    rows.push(header_row(&ISSUE_TABLE_HEADER));
    let mut issue_rows = 0usize;
    for block in &report.columns {
        if block.overridden {
            issue_rows += 1;
            rows.push(vec![
                Cell::Text(block.sheet.clone()),
                Cell::Text(block.column.clone()),
                Cell::from("N/A"),
                Cell::from("ALL ISSUES OVERRIDDEN FOR THIS COLUMN"),
                Cell::from("N/A"),
                Cell::from("N/A"),
                Cell::from("Yes"),
            ]);
            continue;
        }
        for finding in &block.findings {
            issue_rows += 1;
            let value = if finding.value.is_empty() {
                "[Blank]".to_string()
            } else {
                finding.value.clone()
            };
            rows.push(vec![
                Cell::Text(finding.sheet.clone()),
                Cell::Text(finding.column.clone()),
                Cell::Text(finding.rule_kind.to_string()),
                Cell::Text(finding.message.clone()),
                Cell::Text(value),
                Cell::Number(finding.row as f64),
                Cell::from("No"),
            ]);
        }
    }
    if issue_rows == 0 {
        rows.push(vec![Cell::from(
            "No custom validation issues found or overridden to export.",
        )]);
    }
    rows.push(Vec::new());

    rows.push(vec![Cell::from("Duplicate Row Details")]);
    rows.push(header_row(&DUPLICATE_TABLE_HEADER));
    if report.duplicates.is_empty() {
        rows.push(vec![Cell::from("No duplicate rows found to export.")]);
    } else {
        for duplicate in &report.duplicates {
            rows.push(vec![
                Cell::Text(duplicate.sheet.clone()),
                Cell::Number(duplicate.row as f64),
                Cell::Number(duplicate.first_seen_row as f64),
                Cell::Text(format!("{}...", duplicate.sample)),
            ]);
        }
    }

    Sheet::new(SUMMARY_SHEET_NAME, rows)
}

fn label_value(label: &str, value: Cell) -> Vec<Cell> {
    vec![Cell::from(label), value]
}

fn header_row(names: &[&str]) -> Vec<Cell> {
    names.iter().map(|name| Cell::from(*name)).collect()
}
