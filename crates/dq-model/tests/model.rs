//! Serialization round-trips for the persisted and reported types.

use dq_model::{
    Cell, ColumnRule, DataDictionary, DuplicateRecord, Finding, OverrideKey, OverrideSet,
    RuleKind,
};

#[test]
fn finding_serializes() {
    let finding = Finding {
        sheet: "Sheet1".to_string(),
        column: "email".to_string(),
        row: 3,
        rule_kind: RuleKind::Required,
        value: String::new(),
        message: "email is required".to_string(),
    };
    let json = serde_json::to_string(&finding).expect("serialize finding");
    let round: Finding = serde_json::from_str(&json).expect("deserialize finding");
    assert_eq!(round, finding);
}

#[test]
fn duplicate_record_serializes() {
    let record = DuplicateRecord {
        sheet: "Sheet1".to_string(),
        row: 4,
        first_seen_row: 2,
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: DuplicateRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn override_set_serializes() {
    let mut overrides = OverrideSet::new();
    overrides.insert(OverrideKey::new("Sheet1", "age"));
    let json = serde_json::to_string(&overrides).expect("serialize overrides");
    let round: OverrideSet = serde_json::from_str(&json).expect("deserialize overrides");
    assert_eq!(round, overrides);
}

#[test]
fn dictionary_round_trips_through_its_own_shape() {
    let mut dictionary = DataDictionary::new("people");
    dictionary.columns.push(dq_model::ColumnDescriptor {
        column: "id".to_string(),
        description: Some("primary key".to_string()),
        data_type: None,
        nullability: None,
        rules: vec![ColumnRule::new("id", RuleKind::Unique)],
    });
    let json = serde_json::to_string(&dictionary).expect("serialize dictionary");
    let round: DataDictionary = serde_json::from_str(&json).expect("deserialize dictionary");
    assert_eq!(round.columns.len(), 1);
    assert_eq!(round.columns[0].rules[0].kind, RuleKind::Unique);
}

#[test]
fn cell_tagged_representation_is_stable() {
    let json = serde_json::to_string(&Cell::Number(2.5)).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"Number","value":2.5}"#);
    let round: Cell = serde_json::from_str(&json).expect("deserialize cell");
    assert_eq!(round, Cell::Number(2.5));
}
