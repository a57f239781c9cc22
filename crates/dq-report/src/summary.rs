use std::collections::HashMap;

use dq_model::{AggregateStats, Dataset, DuplicateRecord, Finding, OverrideSet};

/// All findings for one (sheet, column), in row order.
#[derive(Debug, Clone)]
pub struct ColumnIssues {
    pub sheet: String,
    pub column: String,
    pub overridden: bool,
    pub findings: Vec<Finding>,
}

/// One duplicate row with a short sample of its content for the report.
#[derive(Debug, Clone)]
pub struct DuplicateDetail {
    pub sheet: String,
    pub row: usize,
    pub first_seen_row: usize,
    /// Display form of the row's first three cells, comma-joined.
    pub sample: String,
}

/// The structured summary payload: what the on-screen report, the exported
/// worksheet, and the JSON file all render from.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub file_name: String,
    pub stats: AggregateStats,
    pub columns: Vec<ColumnIssues>,
    pub duplicates: Vec<DuplicateDetail>,
}

impl SummaryReport {
    /// Group findings by (sheet, column) in first-appearance order and
    /// attach duplicate samples from the original data.
    ///
    /// An overridden column keeps its block but the suppressed findings are
    /// rendered as a single "all overridden" line downstream, never
    /// enumerated. `stats` must have been aggregated with the same
    /// `overrides`.
    pub fn build(
        file_name: impl Into<String>,
        findings: &[Finding],
        duplicates: &[DuplicateRecord],
        datasets: &[Dataset],
        overrides: &OverrideSet,
        stats: AggregateStats,
    ) -> Self {
        let mut columns: Vec<ColumnIssues> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for finding in findings {
            let key = (finding.sheet.clone(), finding.column.clone());
            let slot = *index.entry(key).or_insert_with(|| {
                columns.push(ColumnIssues {
                    sheet: finding.sheet.clone(),
                    column: finding.column.clone(),
                    overridden: overrides.contains(&finding.sheet, &finding.column),
                    findings: Vec::new(),
                });
                columns.len() - 1
            });
            columns[slot].findings.push(finding.clone());
        }
        for block in &mut columns {
            block.findings.sort_by_key(|finding| finding.row);
        }

        let duplicates = duplicates
            .iter()
            .map(|record| DuplicateDetail {
                sheet: record.sheet.clone(),
                row: record.row,
                first_seen_row: record.first_seen_row,
                sample: row_sample(datasets, &record.sheet, record.row),
            })
            .collect();

        Self {
            file_name: file_name.into(),
            stats,
            columns,
            duplicates,
        }
    }
}

/// First three cells of the given report row, comma-joined.
fn row_sample(datasets: &[Dataset], sheet: &str, row: usize) -> String {
    let Some(dataset) = datasets.iter().find(|d| d.sheet_name == sheet) else {
        return String::new();
    };
    // Report rows are 1-based counting the header, so data index = row - 2.
    let Some(cells) = row.checked_sub(2).and_then(|index| dataset.rows.get(index)) else {
        return String::new();
    };
    cells
        .iter()
        .take(3)
        .map(|cell| cell.display())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_model::{Cell, OverrideKey, RuleKind, Verdict};

    fn stats() -> AggregateStats {
        AggregateStats {
            cells_checked: 10,
            rows_checked_for_duplicates: 5,
            effective_issue_count: 2,
            duplicate_row_count: 1,
            issue_rate_percent: 20.0,
            clean_rate_percent: 80.0,
            verdict: Verdict::Fail,
        }
    }

    fn finding(column: &str, row: usize) -> Finding {
        Finding {
            sheet: "s".to_string(),
            column: column.to_string(),
            row,
            rule_kind: RuleKind::Required,
            value: String::new(),
            message: "m".to_string(),
        }
    }

    #[test]
    fn groups_by_column_and_sorts_by_row() {
        let findings = vec![finding("b", 5), finding("a", 4), finding("b", 2)];
        let report = SummaryReport::build(
            "f.xlsx",
            &findings,
            &[],
            &[],
            &OverrideSet::new(),
            stats(),
        );
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[0].column, "b");
        let rows: Vec<usize> = report.columns[0].findings.iter().map(|f| f.row).collect();
        assert_eq!(rows, vec![2, 5]);
    }

    #[test]
    fn marks_overridden_columns() {
        let findings = vec![finding("a", 2)];
        let mut overrides = OverrideSet::new();
        overrides.insert(OverrideKey::new("s", "a"));
        let report =
            SummaryReport::build("f.xlsx", &findings, &[], &[], &overrides, stats());
        assert!(report.columns[0].overridden);
    }

    #[test]
    fn duplicate_sample_takes_the_first_three_cells() {
        let dataset = Dataset {
            sheet_name: "s".to_string(),
            header: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            rows: vec![vec![
                Cell::from("1"),
                Cell::from("2"),
                Cell::Number(3.0),
                Cell::from("4"),
            ]],
            truncated: false,
            skipped_leading_rows: 0,
        };
        let duplicates = vec![DuplicateRecord {
            sheet: "s".to_string(),
            row: 2,
            first_seen_row: 2,
        }];
        let report = SummaryReport::build(
            "f.xlsx",
            &[],
            &duplicates,
            &[dataset],
            &OverrideSet::new(),
            stats(),
        );
        assert_eq!(report.duplicates[0].sample, "1, 2, 3");
    }
}
