use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use dq_model::{Cell, Sheet};

/// Read a CSV file into a raw [`Sheet`].
///
/// This is the host stand-in for the out-of-scope spreadsheet reader: every
/// non-empty cell arrives as text (BOM stripped, otherwise untouched) and
/// empty cells as `Empty`. Header detection and the row cap belong to the
/// adapter, not here.
pub fn read_csv_sheet(path: &Path) -> Result<Sheet> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<Cell> = record.iter().map(to_cell).collect();
        rows.push(row);
    }
    Ok(Sheet::new(name, rows))
}

fn to_cell(raw: &str) -> Cell {
    let value = raw.trim_matches('\u{feff}');
    if value.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_cells_without_coercion() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "id,amount").expect("write");
        writeln!(file, "1, 2.5 ").expect("write");
        writeln!(file, ",x").expect("write");

        let sheet = read_csv_sheet(file.path()).expect("read sheet");
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[1][0], Cell::Text("1".to_string()));
        // Whitespace is preserved; trimming is the rules' concern.
        assert_eq!(sheet.rows[1][1], Cell::Text(" 2.5 ".to_string()));
        assert_eq!(sheet.rows[2][0], Cell::Empty);
    }

    #[test]
    fn sheet_is_named_after_the_file_stem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("accounts.csv");
        std::fs::write(&path, "a,b\n1,2\n").expect("write");
        let sheet = read_csv_sheet(&path).expect("read sheet");
        assert_eq!(sheet.name, "accounts");
    }
}
