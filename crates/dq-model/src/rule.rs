use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminated rule kind.
///
/// Kinds the executor does not recognize are preserved as `Unknown` and
/// evaluated as always-valid, so a dictionary authored against a newer rule
/// vocabulary degrades gracefully instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Required,
    AllowedValues,
    NumericRange,
    Regex,
    DatePast,
    Unique,
    None,
    Unknown(String),
}

impl RuleKind {
    /// Parse the trimmed, case-insensitive wire form of a rule kind.
    /// An empty kind means "no rule" rather than an unknown one.
    pub fn parse(raw: &str) -> RuleKind {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "REQUIRED" => RuleKind::Required,
            "ALLOWED_VALUES" => RuleKind::AllowedValues,
            "NUMERIC_RANGE" => RuleKind::NumericRange,
            "REGEX" => RuleKind::Regex,
            "DATE_PAST" => RuleKind::DatePast,
            "UNIQUE" => RuleKind::Unique,
            "" | "NONE" => RuleKind::None,
            _ => RuleKind::Unknown(normalized),
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &str {
        match self {
            RuleKind::Required => "REQUIRED",
            RuleKind::AllowedValues => "ALLOWED_VALUES",
            RuleKind::NumericRange => "NUMERIC_RANGE",
            RuleKind::Regex => "REGEX",
            RuleKind::DatePast => "DATE_PAST",
            RuleKind::Unique => "UNIQUE",
            RuleKind::None => "NONE",
            RuleKind::Unknown(name) => name,
        }
    }

    /// Kinds that require a non-empty parameter to be well-configured.
    pub fn requires_value(&self) -> bool {
        matches!(
            self,
            RuleKind::AllowedValues | RuleKind::NumericRange | RuleKind::Regex
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation rule attached to a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Header this rule binds to, by exact trimmed match. Rules naming no
    /// header in the dataset are silently inert.
    pub column: String,
    pub kind: RuleKind,
    /// Rule parameter; semantics depend on `kind` (comma list, `"min-max"`,
    /// regex source). Unused for REQUIRED, DATE_PAST, and UNIQUE.
    pub value: Option<String>,
    /// User-facing failure text; a default is generated when absent.
    pub message: Option<String>,
}

impl ColumnRule {
    pub fn new(column: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            column: column.into(),
            kind,
            value: None,
            message: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The rule parameter, trimmed; `None` when absent or whitespace.
    pub fn trimmed_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Configured failure message, or the generated default.
    pub fn failure_message(&self) -> String {
        if let Some(message) = self.message.as_deref()
            && !message.trim().is_empty()
        {
            return message.to_string();
        }
        match self.kind {
            RuleKind::Unique => {
                format!("Value in column '{}' is not unique.", self.column)
            }
            _ => format!(
                "Validation failed for {} (Rule: {})",
                self.column, self.kind
            ),
        }
    }
}
