use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DqError, Result};
use crate::rule::{ColumnRule, RuleKind};

/// One column descriptor from the data dictionary: the descriptive metadata
/// the authoring tool collects plus the validation rules bound to the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub column: String,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub nullability: Option<String>,
    pub rules: Vec<ColumnRule>,
}

/// Ordered set of column descriptors for one dataset shape.
///
/// Immutable input to a validation run; the engine is indifferent to where
/// the document came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataDictionary {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl DataDictionary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Parse the persisted dictionary document.
    ///
    /// The document is either a bare JSON array of rule records, or an object
    /// wrapping that array under `rules_json` (the shape the storage layer
    /// persists) or `rules`. Two record layouts coexist in stored documents
    /// and both are accepted:
    ///
    /// - flat: `"Column Name"`, `"Validation Type"`, `"Validation Value"`,
    ///   `"Failure Message"` (the engine wire format; names are exact and
    ///   must not be renamed without a migration);
    /// - nested: `"Column Name"` plus a `validation_rules` array of
    ///   `{type, value, message}` objects (the authoring tool's layout).
    ///
    /// Records whose column name is missing or trims to empty are discarded.
    pub fn from_json_str(name: impl Into<String>, document: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(document)?;
        Self::from_json_value(name, &value)
    }

    pub fn from_json_value(name: impl Into<String>, document: &Value) -> Result<Self> {
        let records = match document {
            Value::Array(records) => records.as_slice(),
            Value::Object(map) => map
                .get("rules_json")
                .or_else(|| map.get("rules"))
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .ok_or_else(|| {
                    DqError::Message(
                        "dictionary document has no rules_json array".to_string(),
                    )
                })?,
            _ => {
                return Err(DqError::Message(
                    "dictionary document must be a JSON array of rule records".to_string(),
                ));
            }
        };

        let mut dictionary = Self::new(name);
        for record in records {
            if let Some(descriptor) = parse_record(record) {
                dictionary.columns.push(descriptor);
            }
        }
        Ok(dictionary)
    }

    /// All rules across all descriptors, in document order.
    pub fn rules(&self) -> impl Iterator<Item = &ColumnRule> {
        self.columns.iter().flat_map(|column| column.rules.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn parse_record(record: &Value) -> Option<ColumnDescriptor> {
    let map = record.as_object()?;
    let column = field_string(map, &["Column Name", "column_name"])?;
    let column = column.trim().to_string();
    if column.is_empty() {
        return None;
    }

    let mut descriptor = ColumnDescriptor {
        column: column.clone(),
        description: field_string(map, &["Description", "description"]),
        data_type: field_string(map, &["Data Type", "data_type"]),
        nullability: field_string(map, &["Nullable", "nullability"]),
        rules: Vec::new(),
    };

    // Flat engine wire format.
    if let Some(kind_raw) = field_string(map, &["Validation Type"]) {
        let kind = RuleKind::parse(&kind_raw);
        if kind != RuleKind::None {
            descriptor.rules.push(ColumnRule {
                column: column.clone(),
                kind,
                value: field_string(map, &["Validation Value"]),
                message: field_string(map, &["Failure Message"]),
            });
        }
    }

    // Nested authoring-tool format.
    if let Some(nested) = map.get("validation_rules").and_then(Value::as_array) {
        for entry in nested {
            let Some(entry) = entry.as_object() else {
                continue;
            };
            let Some(kind_raw) = field_string(entry, &["type"]) else {
                continue;
            };
            let kind = RuleKind::parse(&kind_raw);
            if kind == RuleKind::None {
                continue;
            }
            descriptor.rules.push(ColumnRule {
                column: column.clone(),
                kind,
                value: field_string(entry, &["value"]),
                message: field_string(entry, &["message"]),
            });
        }
    }

    Some(descriptor)
}

/// First present field among `names`, coerced to a string. Numeric and
/// boolean JSON values are accepted (stored documents are not strict about
/// value types); null and missing yield `None`.
fn field_string(map: &serde_json::Map<String, Value>, names: &[&str]) -> Option<String> {
    for name in names {
        match map.get(*name) {
            Some(Value::String(text)) => return Some(text.clone()),
            Some(Value::Number(number)) => return Some(number.to_string()),
            Some(Value::Bool(flag)) => return Some(flag.to_string()),
            Some(Value::Null) | None => continue,
            Some(_) => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_wire_format() {
        let document = r#"[
            {"Column Name": " id ", "Validation Type": "UNIQUE"},
            {"Column Name": "age", "Validation Type": "NUMERIC_RANGE",
             "Validation Value": "0-120", "Failure Message": "age out of range"}
        ]"#;
        let dictionary = DataDictionary::from_json_str("people", document).unwrap();
        assert_eq!(dictionary.columns.len(), 2);
        assert_eq!(dictionary.columns[0].column, "id");
        assert_eq!(dictionary.columns[0].rules[0].kind, RuleKind::Unique);
        let age = &dictionary.columns[1].rules[0];
        assert_eq!(age.kind, RuleKind::NumericRange);
        assert_eq!(age.trimmed_value(), Some("0-120"));
        assert_eq!(age.failure_message(), "age out of range");
    }

    #[test]
    fn parses_nested_authoring_format() {
        let document = r#"{"rules_json": [
            {"Column Name": "email", "description": "contact email",
             "data_type": "string", "nullability": "NOT NULL",
             "validation_rules": [
                {"type": "REQUIRED", "value": "", "message": "email required"},
                {"type": "REGEX", "value": ".+@.+", "message": ""}
             ]}
        ]}"#;
        let dictionary = DataDictionary::from_json_str("contacts", document).unwrap();
        assert_eq!(dictionary.columns.len(), 1);
        let descriptor = &dictionary.columns[0];
        assert_eq!(descriptor.description.as_deref(), Some("contact email"));
        assert_eq!(descriptor.rules.len(), 2);
        assert_eq!(descriptor.rules[0].kind, RuleKind::Required);
        assert_eq!(descriptor.rules[1].kind, RuleKind::Regex);
    }

    #[test]
    fn discards_records_without_a_column_name() {
        let document = r#"[
            {"Column Name": "  "},
            {"Validation Type": "REQUIRED"},
            {"Column Name": "kept"}
        ]"#;
        let dictionary = DataDictionary::from_json_str("d", document).unwrap();
        assert_eq!(dictionary.columns.len(), 1);
        assert_eq!(dictionary.columns[0].column, "kept");
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let document = r#"[
            {"Column Name": "c", "Validation Type": "future_rule"}
        ]"#;
        let dictionary = DataDictionary::from_json_str("d", document).unwrap();
        assert_eq!(
            dictionary.columns[0].rules[0].kind,
            RuleKind::Unknown("FUTURE_RULE".to_string())
        );
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(DataDictionary::from_json_str("d", "42").is_err());
        assert!(DataDictionary::from_json_str("d", r#"{"other": 1}"#).is_err());
    }
}
