//! Property tests for the aggregation engine.

use dq_model::{DuplicateRecord, Finding, OverrideKey, OverrideSet, RuleKind};
use dq_validate::aggregate;
use proptest::prelude::*;

fn finding_strategy() -> impl Strategy<Value = Finding> {
    (
        prop_oneof![Just("Sheet1"), Just("Sheet2")],
        prop_oneof![Just("a"), Just("b"), Just("c")],
        2usize..200,
    )
        .prop_map(|(sheet, column, row)| Finding {
            sheet: sheet.to_string(),
            column: column.to_string(),
            row,
            rule_kind: RuleKind::Required,
            value: String::new(),
            message: "m".to_string(),
        })
}

fn duplicates_strategy() -> impl Strategy<Value = Vec<DuplicateRecord>> {
    prop::collection::vec(
        (3usize..200, 2usize..3).prop_map(|(row, first)| DuplicateRecord {
            sheet: "Sheet1".to_string(),
            row,
            first_seen_row: first,
        }),
        0..20,
    )
}

proptest! {
    #[test]
    fn clean_rate_stays_within_bounds(
        findings in prop::collection::vec(finding_strategy(), 0..50),
        duplicates in duplicates_strategy(),
        cells in 0u64..10_000,
        rows in 0u64..10_000,
    ) {
        let stats = aggregate(&findings, &duplicates, &OverrideSet::new(), cells, rows);
        prop_assert!(stats.clean_rate_percent >= 0.0);
        prop_assert!(stats.clean_rate_percent <= 100.0);
        prop_assert!(stats.issue_rate_percent >= 0.0);
    }

    #[test]
    fn override_reduces_by_exactly_the_column_count(
        findings in prop::collection::vec(finding_strategy(), 0..50),
        cells in 1u64..10_000,
    ) {
        let baseline = aggregate(&findings, &[], &OverrideSet::new(), cells, 0);
        prop_assert_eq!(baseline.effective_issue_count, findings.len() as u64);

        let column_count = findings
            .iter()
            .filter(|f| f.sheet == "Sheet1" && f.column == "a")
            .count() as u64;

        let mut overrides = OverrideSet::new();
        overrides.insert(OverrideKey::new("Sheet1", "a"));
        let overridden = aggregate(&findings, &[], &overrides, cells, 0);
        prop_assert_eq!(
            overridden.effective_issue_count,
            baseline.effective_issue_count - column_count
        );

        // Removing the override restores the baseline exactly.
        overrides.remove(&OverrideKey::new("Sheet1", "a"));
        let restored = aggregate(&findings, &[], &overrides, cells, 0);
        prop_assert_eq!(restored, baseline);
    }

    #[test]
    fn aggregation_is_idempotent(
        findings in prop::collection::vec(finding_strategy(), 0..50),
        duplicates in duplicates_strategy(),
        cells in 0u64..10_000,
        rows in 0u64..10_000,
    ) {
        let overrides = OverrideSet::new();
        let first = aggregate(&findings, &duplicates, &overrides, cells, rows);
        let second = aggregate(&findings, &duplicates, &overrides, cells, rows);
        prop_assert_eq!(first, second);
    }
}
