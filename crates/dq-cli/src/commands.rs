use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use comfy_table::Table;
use tracing::{info, info_span};

use dq_ingest::{AdapterOptions, adapt_sheet, load_dictionary, read_csv_sheet};
use dq_model::{Dataset, DuplicateRecord, Finding, OverrideKey, OverrideSet, Sheet};
use dq_report::{
    SummaryReport, export_workbook, summary_sheet, write_report_json, write_workbook_csv,
};
use dq_validate::{aggregate, find_duplicates, validate};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;

/// Per-sheet counts for the on-screen summary table.
pub struct SheetOutcome {
    pub sheet: String,
    pub rows: usize,
    pub truncated: bool,
    pub finding_count: usize,
    pub duplicate_count: usize,
}

/// Everything `check` produced: the report plus where it was written.
pub struct CheckOutcome {
    pub report: SummaryReport,
    pub sheets: Vec<SheetOutcome>,
    pub report_path: Option<PathBuf>,
    pub export_paths: Vec<PathBuf>,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let overrides = parse_overrides(&args.overrides)?;
    let mut options = AdapterOptions::default();
    if let Some(max_rows) = args.max_rows {
        options.max_rows = max_rows;
    }
    let today = Utc::now().date_naive();

    let mut originals: Vec<Sheet> = Vec::new();
    let mut datasets: Vec<Dataset> = Vec::new();
    let mut findings: Vec<Finding> = Vec::new();
    let mut duplicates: Vec<DuplicateRecord> = Vec::new();
    let mut outcomes: Vec<SheetOutcome> = Vec::new();
    let mut cells_checked = 0u64;
    let mut rows_checked = 0u64;

    for path in &args.sheets {
        let span = info_span!("sheet", path = %path.display());
        let _guard = span.enter();
        let sheet = read_csv_sheet(path)?;
        let dataset = adapt_sheet(&sheet, &options);
        let result = validate(&dataset, &dictionary, today);
        let sheet_duplicates = find_duplicates(&dataset);
        info!(
            rows = dataset.rows.len(),
            findings = result.findings.len(),
            duplicates = sheet_duplicates.len(),
            truncated = dataset.truncated,
            "sheet validated"
        );
        outcomes.push(SheetOutcome {
            sheet: dataset.sheet_name.clone(),
            rows: dataset.rows.len(),
            truncated: dataset.truncated,
            finding_count: result.findings.len(),
            duplicate_count: sheet_duplicates.len(),
        });
        cells_checked += result.cells_checked;
        rows_checked += dataset.rows.len() as u64;
        findings.extend(result.findings);
        duplicates.extend(sheet_duplicates);
        originals.push(sheet);
        datasets.push(dataset);
    }

    let stats = aggregate(
        &findings,
        &duplicates,
        &overrides,
        cells_checked,
        rows_checked,
    );
    let report = SummaryReport::build(
        sheet_file_names(&args.sheets),
        &findings,
        &duplicates,
        &datasets,
        &overrides,
        stats,
    );

    let mut report_path = None;
    let mut export_paths = Vec::new();
    if !args.dry_run {
        let output_dir = resolve_output_dir(args);
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;
        report_path = Some(write_report_json(&output_dir, &report)?);
        if args.export {
            let workbook = export_workbook(&originals, summary_sheet(&report));
            export_paths = write_workbook_csv(&output_dir, &workbook)?;
        }
    }

    Ok(CheckOutcome {
        report,
        sheets: outcomes,
        report_path,
        export_paths,
    })
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Rule Value", "Fails When"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "REQUIRED",
        "(none)",
        "the cell is empty or whitespace-only",
    ]);
    table.add_row(vec![
        "ALLOWED_VALUES",
        "comma-separated list",
        "the trimmed cell is not in the list (case-insensitive)",
    ]);
    table.add_row(vec![
        "NUMERIC_RANGE",
        "min-max, e.g. 0-120 or -10-10",
        "the cell is not a number or falls outside [min, max]",
    ]);
    table.add_row(vec![
        "REGEX",
        "regular expression",
        "the pattern does not match the cell's text (untrimmed)",
    ]);
    table.add_row(vec![
        "DATE_PAST",
        "(none)",
        "the cell is not a date, or the date is today or later",
    ]);
    table.add_row(vec![
        "UNIQUE",
        "(none)",
        "the trimmed, lowercased value repeats within the column",
    ]);
    println!("{table}");
    println!();
    println!("Non-REQUIRED rules skip blank cells. Unknown rule types are");
    println!("inert: their cells count as checked and always pass.");
    Ok(())
}

/// Parse repeated `--override SHEET:COLUMN` flags into an override set.
fn parse_overrides(specs: &[String]) -> Result<OverrideSet> {
    let mut overrides = OverrideSet::new();
    for spec in specs {
        let Some((sheet, column)) = spec.split_once(':') else {
            bail!("invalid override '{spec}': expected SHEET:COLUMN");
        };
        if sheet.is_empty() || column.is_empty() {
            bail!("invalid override '{spec}': expected SHEET:COLUMN");
        }
        overrides.insert(OverrideKey::new(sheet, column));
    }
    Ok(overrides)
}

fn resolve_output_dir(args: &CheckArgs) -> PathBuf {
    if let Some(dir) = &args.output_dir {
        return dir.clone();
    }
    let base = args
        .sheets
        .first()
        .and_then(|path| path.parent())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    base.join("output")
}

fn sheet_file_names(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| {
            path.file_name()
                .map_or_else(|| path.display().to_string(), |name| {
                    name.to_string_lossy().into_owned()
                })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
