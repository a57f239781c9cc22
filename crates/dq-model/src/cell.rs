use serde::{Deserialize, Serialize};

/// One cell as it arrived from the tabular reader.
///
/// The adapter performs no coercion: text stays text, numbers stay numbers,
/// missing cells stay `Empty`. Every rule does its own coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Blank means missing or text that trims to the empty string.
    /// A numeric cell is never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// String form used for rule evaluation, fingerprinting, and reports.
    /// Missing cells render as the empty string.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(value) => format_number(*value),
            Cell::Empty => String::new(),
        }
    }

    /// Numeric view of the cell, if it has one. Text is parsed after trim.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(text) => text.trim().parse::<f64>().ok(),
            Cell::Empty => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Integral floats print without a trailing `.0` so that `1.0` and `"1"`
/// fingerprint identically, matching how spreadsheet readers render them.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
