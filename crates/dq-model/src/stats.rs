use serde::{Deserialize, Serialize};

/// Clean-rate percentage at or above which a run passes.
pub const CLEAN_RATE_PASS_THRESHOLD: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Fail => "Fail",
        }
    }
}

/// Derived summary statistics for one run.
///
/// A pure function of the findings, duplicates, override set, and coverage
/// counters it was computed from: always recomputed from scratch, never
/// patched incrementally, so it cannot drift from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// (cell, rule) evaluations that were not skipped for blankness.
    pub cells_checked: u64,
    /// Data rows fingerprinted by the duplicate detector.
    pub rows_checked_for_duplicates: u64,
    /// Findings whose column is not overridden.
    pub effective_issue_count: u64,
    /// Duplicates are never overridable.
    pub duplicate_row_count: u64,
    pub issue_rate_percent: f64,
    pub clean_rate_percent: f64,
    pub verdict: Verdict,
}

impl AggregateStats {
    pub fn total_effective_issues(&self) -> u64 {
        self.effective_issue_count + self.duplicate_row_count
    }
}
