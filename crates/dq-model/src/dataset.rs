use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// One decoded sheet as it arrives from the tabular reader: a rectangular
/// array of rows, header not yet identified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Adapter output: header + data rows in the shape the executor needs.
///
/// Row numbers in findings and duplicate records are 1-based counting the
/// header row as row 1, so the first data row is row 2. The helpers below
/// are the single place that convention lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub sheet_name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    /// Set when rows beyond the configured cap were dropped. Truncation is
    /// observable to the caller, never silent.
    pub truncated: bool,
    /// Fully-blank rows skipped before the header row was found.
    pub skipped_leading_rows: usize,
}

impl Dataset {
    /// Report row number for the 0-based data row `index`.
    pub fn row_number(index: usize) -> usize {
        index + 2
    }

    /// Cell at (0-based data row, 0-based column), `Empty` when the row is
    /// ragged and short.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&Cell::Empty)
    }
}
