//! The validation executor: evaluates every configured rule against every
//! (row, column) pair of one adapted dataset.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use dq_model::{ColumnRule, DataDictionary, Dataset, Finding, RuleKind};

use crate::date::parse_cell_date;

/// Findings and coverage counters for one sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetFindings {
    pub sheet: String,
    pub findings: Vec<Finding>,
    /// (cell, rule) evaluations that were not skipped for blankness:
    /// REQUIRED checks on blanks count, the UNIQUE pass counts its non-blank
    /// cells. Deterministic for identical inputs.
    pub cells_checked: u64,
}

/// Validate one sheet against a dictionary.
///
/// Never fails: data-quality conditions become findings, degraded rules
/// (broken regex, unknown kinds) are logged and skipped per the documented
/// semantics, and the result covers everything that could be processed.
///
/// `today` is the DATE_PAST comparison date, passed explicitly so runs are
/// reproducible; callers normally pass the current UTC date.
pub fn validate(dataset: &Dataset, dictionary: &DataDictionary, today: NaiveDate) -> SheetFindings {
    let mut run = SheetFindings {
        sheet: dataset.sheet_name.clone(),
        ..SheetFindings::default()
    };

    // Trimmed header name -> rules. A column may carry several rules,
    // including duplicates of the same kind; all of them are evaluated.
    let mut rules_by_column: HashMap<&str, Vec<&ColumnRule>> = HashMap::new();
    for rule in dictionary.rules() {
        rules_by_column.entry(rule.column.as_str()).or_default().push(rule);
    }

    for (col_idx, raw_header) in dataset.header.iter().enumerate() {
        let column = raw_header.trim();
        let Some(rules) = rules_by_column.get(column) else {
            continue;
        };

        // Single-cell rules first; the UNIQUE rule runs as its own
        // whole-column pass afterwards.
        for rule in rules {
            if rule.kind != RuleKind::Unique {
                run_cell_rule(&mut run, dataset, col_idx, column, rule, today);
            }
        }
        for rule in rules {
            if rule.kind == RuleKind::Unique {
                run_unique_rule(&mut run, dataset, col_idx, column, rule);
            }
        }
    }

    run
}

/// Outcome of preparing one rule's parameter before the row loop.
enum Prepared {
    Required,
    Allowed(HashSet<String>),
    Range { min: f64, max: f64 },
    Pattern(Regex),
    DatePast,
    /// Rule parameter missing or malformed where one is required: every
    /// evaluated cell fails with a misconfiguration message.
    Misconfigured,
    /// Evaluates every cell as valid (NONE, unknown kinds, broken regex).
    AlwaysValid,
}

fn prepare(rule: &ColumnRule, column: &str) -> Prepared {
    match &rule.kind {
        RuleKind::Required => Prepared::Required,
        RuleKind::AllowedValues => match rule.trimmed_value() {
            Some(list) => Prepared::Allowed(
                list.split(',')
                    .map(|token| token.trim().to_lowercase())
                    .collect(),
            ),
            None => Prepared::Misconfigured,
        },
        RuleKind::NumericRange => match rule.trimmed_value().and_then(parse_range) {
            Some((min, max)) => Prepared::Range { min, max },
            None => Prepared::Misconfigured,
        },
        RuleKind::Regex => match rule.trimmed_value() {
            Some(source) => match Regex::new(source) {
                Ok(pattern) => Prepared::Pattern(pattern),
                Err(error) => {
                    // A broken pattern must never crash the run or silently
                    // flag everything.
                    warn!(column, pattern = source, %error, "invalid regex; rule skipped");
                    Prepared::AlwaysValid
                }
            },
            None => Prepared::Misconfigured,
        },
        RuleKind::DatePast => Prepared::DatePast,
        // UNIQUE never reaches the single-cell path; it runs as its own
        // whole-column pass.
        RuleKind::Unique => Prepared::AlwaysValid,
        RuleKind::None => Prepared::AlwaysValid,
        RuleKind::Unknown(name) => {
            warn!(column, kind = %name, "unknown validation type; rule is inert");
            Prepared::AlwaysValid
        }
    }
}

/// Parse `"min-max"`. The range separator is the first `-` that is not the
/// number's leading sign, so `-10-10` reads as min -10, max 10.
fn parse_range(raw: &str) -> Option<(f64, f64)> {
    for (index, _) in raw.match_indices('-') {
        if index == 0 {
            continue;
        }
        let (left, right) = raw.split_at(index);
        let min = left.trim().parse::<f64>().ok();
        let max = right[1..].trim().parse::<f64>().ok();
        if let (Some(min), Some(max)) = (min, max)
            && min.is_finite()
            && max.is_finite()
        {
            return Some((min, max));
        }
    }
    None
}

fn run_cell_rule(
    run: &mut SheetFindings,
    dataset: &Dataset,
    col_idx: usize,
    column: &str,
    rule: &ColumnRule,
    today: NaiveDate,
) {
    let prepared = prepare(rule, column);
    let required = rule.kind == RuleKind::Required;

    for row_idx in 0..dataset.rows.len() {
        let cell = dataset.cell(row_idx, col_idx);
        let blank = cell.is_blank();

        // Blank handling is exclusively the job of a REQUIRED rule: other
        // rules only constrain non-empty values, so a blank cell under a
        // REQUIRED + REGEX column is flagged once, not twice.
        if blank && !required {
            continue;
        }
        run.cells_checked += 1;

        let valid = match &prepared {
            Prepared::Required => !blank,
            Prepared::Allowed(allowed) => {
                allowed.contains(&cell.display().trim().to_lowercase())
            }
            Prepared::Range { min, max } => cell
                .as_number()
                .is_some_and(|value| value.is_finite() && value >= *min && value <= *max),
            Prepared::Pattern(pattern) => pattern.is_match(&cell.display()),
            Prepared::DatePast => {
                parse_cell_date(cell).is_some_and(|date| date < today)
            }
            Prepared::Misconfigured => false,
            Prepared::AlwaysValid => true,
        };

        if !valid {
            let message = match &prepared {
                Prepared::Misconfigured => format!(
                    "Rule {} on column '{}' is misconfigured: missing or invalid rule value",
                    rule.kind, column
                ),
                _ => rule.failure_message(),
            };
            run.findings.push(Finding {
                sheet: dataset.sheet_name.clone(),
                column: column.to_string(),
                row: Dataset::row_number(row_idx),
                rule_kind: rule.kind.clone(),
                value: cell.display(),
                message,
            });
        }
    }
}

/// Whole-column uniqueness pass: case-insensitive over trimmed non-blank
/// values, each repeat pointing implicitly at the first occurrence. A repeat
/// already flagged as UNIQUE in this column for the same (row, value) is
/// not reported twice; other columns' findings are never consulted.
fn run_unique_rule(
    run: &mut SheetFindings,
    dataset: &Dataset,
    col_idx: usize,
    column: &str,
    rule: &ColumnRule,
) {
    let mut seen: HashSet<String> = HashSet::new();

    for row_idx in 0..dataset.rows.len() {
        let cell = dataset.cell(row_idx, col_idx);
        if cell.is_blank() {
            continue;
        }
        run.cells_checked += 1;

        let normalized = cell.display().trim().to_lowercase();
        if seen.insert(normalized.clone()) {
            continue;
        }

        let row = Dataset::row_number(row_idx);
        let already_flagged = run.findings.iter().any(|finding| {
            finding.rule_kind == RuleKind::Unique
                && finding.column == column
                && finding.row == row
                && finding.value.trim().to_lowercase() == normalized
        });
        if already_flagged {
            continue;
        }
        run.findings.push(Finding {
            sheet: dataset.sheet_name.clone(),
            column: column.to_string(),
            row,
            rule_kind: RuleKind::Unique,
            value: cell.display(),
            message: rule.failure_message(),
        });
    }
}
