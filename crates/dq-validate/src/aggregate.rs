use dq_model::{
    AggregateStats, CLEAN_RATE_PASS_THRESHOLD, DuplicateRecord, Finding, OverrideSet, Verdict,
};

/// Recompute the aggregate quality statistics from scratch.
///
/// Pure and idempotent: called after the initial run and after every
/// override toggle, always over the full inputs, never patched
/// incrementally. With an empty override set the effective issue count
/// equals `findings.len()`. Duplicates are never overridable.
pub fn aggregate(
    findings: &[Finding],
    duplicates: &[DuplicateRecord],
    overrides: &OverrideSet,
    cells_checked: u64,
    rows_checked_for_duplicates: u64,
) -> AggregateStats {
    let effective_issue_count = findings
        .iter()
        .filter(|finding| !overrides.covers(finding))
        .count() as u64;
    let duplicate_row_count = duplicates.len() as u64;

    let total_issues = effective_issue_count + duplicate_row_count;
    // Denominator floor of 1 avoids a divide-by-zero on an empty dataset.
    let denominator = (cells_checked + rows_checked_for_duplicates).max(1);
    let issue_rate_percent = 100.0 * total_issues as f64 / denominator as f64;
    let clean_rate_percent = (100.0 - issue_rate_percent).max(0.0);
    let verdict = if clean_rate_percent >= CLEAN_RATE_PASS_THRESHOLD {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    AggregateStats {
        cells_checked,
        rows_checked_for_duplicates,
        effective_issue_count,
        duplicate_row_count,
        issue_rate_percent,
        clean_rate_percent,
        verdict,
    }
}
