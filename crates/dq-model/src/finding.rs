use serde::{Deserialize, Serialize};

use crate::rule::RuleKind;

/// One validation rule failure at a specific sheet/column/row.
///
/// Findings are pure outputs and are never mutated after the run; overrides
/// change their weight at aggregation time, not their existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub sheet: String,
    pub column: String,
    /// 1-based, counting the header row as row 1.
    pub row: usize,
    pub rule_kind: RuleKind,
    /// Raw cell value in display form; empty string for blank cells.
    pub value: String,
    pub message: String,
}

/// One repeated row, detected by exact-match fingerprinting of the full
/// trimmed row content. Row numbers share the findings convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub sheet: String,
    pub row: usize,
    pub first_seen_row: usize,
}
