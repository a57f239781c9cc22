use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use dq_model::AggregateStats;

use crate::summary::SummaryReport;

const REPORT_SCHEMA: &str = "dq-engine.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub file_name: String,
    pub stats: AggregateStats,
    pub columns: Vec<ColumnPayload>,
    pub duplicates: Vec<DuplicatePayload>,
}

#[derive(Debug, Serialize)]
pub struct ColumnPayload {
    pub sheet: String,
    pub column: String,
    pub overridden: bool,
    pub finding_count: usize,
    /// Empty for overridden columns: suppressed findings are not enumerated.
    pub findings: Vec<FindingPayload>,
}

#[derive(Debug, Serialize)]
pub struct FindingPayload {
    pub row: usize,
    pub rule_type: String,
    pub value: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DuplicatePayload {
    pub sheet: String,
    pub row: usize,
    pub first_seen_row: usize,
    pub sample: String,
}

pub fn report_payload(report: &SummaryReport) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        file_name: report.file_name.clone(),
        stats: report.stats,
        columns: report
            .columns
            .iter()
            .map(|block| ColumnPayload {
                sheet: block.sheet.clone(),
                column: block.column.clone(),
                overridden: block.overridden,
                finding_count: block.findings.len(),
                findings: if block.overridden {
                    Vec::new()
                } else {
                    block
                        .findings
                        .iter()
                        .map(|finding| FindingPayload {
                            row: finding.row,
                            rule_type: finding.rule_kind.to_string(),
                            value: finding.value.clone(),
                            message: finding.message.clone(),
                        })
                        .collect()
                },
            })
            .collect(),
        duplicates: report
            .duplicates
            .iter()
            .map(|duplicate| DuplicatePayload {
                sheet: duplicate.sheet.clone(),
                row: duplicate.row,
                first_seen_row: duplicate.first_seen_row,
                sample: duplicate.sample.clone(),
            })
            .collect(),
    }
}

pub fn write_report_json(output_dir: &Path, report: &SummaryReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("validation_report.json");
    let payload = report_payload(report);
    let json = serde_json::to_string_pretty(&payload).context("serialize report")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write report: {}", output_path.display()))?;
    Ok(output_path)
}
