use tracing::warn;

use dq_model::{Cell, Dataset, Sheet};

/// Hard cap on data rows processed per sheet. Bounds worst-case work in
/// place of a cooperative cancellation signal.
pub const MAX_ROWS: usize = 5000;

#[derive(Debug, Clone, Copy)]
pub struct AdapterOptions {
    pub max_rows: usize,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self { max_rows: MAX_ROWS }
    }
}

/// Normalize a decoded sheet into the shape the executor needs.
///
/// Scans forward past fully-blank rows to find the true header row rather
/// than assuming row 0, trims headers to strings, and drops data rows past
/// `max_rows` with an observable `truncated` flag. Cells are not coerced.
pub fn adapt_sheet(sheet: &Sheet, options: &AdapterOptions) -> Dataset {
    let header_index = sheet
        .rows
        .iter()
        .position(|row| row.iter().any(|cell| !cell.is_blank()));

    let Some(header_index) = header_index else {
        return Dataset {
            sheet_name: sheet.name.clone(),
            header: Vec::new(),
            rows: Vec::new(),
            truncated: false,
            skipped_leading_rows: sheet.rows.len(),
        };
    };

    let header: Vec<String> = sheet.rows[header_index]
        .iter()
        .map(|cell| cell.display().trim().to_string())
        .collect();

    let data_rows = &sheet.rows[header_index + 1..];
    let truncated = data_rows.len() > options.max_rows;
    if truncated {
        warn!(
            sheet = %sheet.name,
            rows = data_rows.len(),
            max_rows = options.max_rows,
            "sheet exceeds row cap; processing only the first rows"
        );
    }

    let rows: Vec<Vec<Cell>> = data_rows
        .iter()
        .take(options.max_rows)
        .map(|row| {
            // Pad/cut each row to header width; the executor indexes by
            // header position.
            let mut cells: Vec<Cell> = row.iter().take(header.len()).cloned().collect();
            cells.resize(header.len(), Cell::Empty);
            cells
        })
        .collect();

    Dataset {
        sheet_name: sheet.name.clone(),
        header,
        rows,
        truncated,
        skipped_leading_rows: header_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    Cell::Empty
                } else {
                    Cell::from(*cell)
                }
            })
            .collect()
    }

    #[test]
    fn finds_header_past_blank_rows() {
        let sheet = Sheet::new(
            "s",
            vec![
                vec![Cell::Empty, Cell::Empty],
                vec![Cell::Text("  ".to_string()), Cell::Empty],
                text_row(&[" id ", "name"]),
                text_row(&["1", "a"]),
            ],
        );
        let dataset = adapt_sheet(&sheet, &AdapterOptions::default());
        assert_eq!(dataset.header, vec!["id", "name"]);
        assert_eq!(dataset.skipped_leading_rows, 2);
        assert_eq!(dataset.rows.len(), 1);
        assert!(!dataset.truncated);
    }

    #[test]
    fn truncates_at_max_rows_with_flag() {
        let mut rows = vec![text_row(&["id"])];
        for i in 0..10 {
            rows.push(text_row(&[&i.to_string()]));
        }
        let sheet = Sheet::new("s", rows);
        let dataset = adapt_sheet(&sheet, &AdapterOptions { max_rows: 4 });
        assert_eq!(dataset.rows.len(), 4);
        assert!(dataset.truncated);
    }

    #[test]
    fn pads_and_cuts_to_header_width() {
        let sheet = Sheet::new(
            "s",
            vec![
                text_row(&["a", "b"]),
                text_row(&["1"]),
                text_row(&["1", "2", "3"]),
            ],
        );
        let dataset = adapt_sheet(&sheet, &AdapterOptions::default());
        assert_eq!(dataset.rows[0], vec![Cell::from("1"), Cell::Empty]);
        assert_eq!(dataset.rows[1], vec![Cell::from("1"), Cell::from("2")]);
    }

    #[test]
    fn all_blank_sheet_yields_empty_dataset() {
        let sheet = Sheet::new("s", vec![vec![Cell::Empty], vec![Cell::Empty]]);
        let dataset = adapt_sheet(&sheet, &AdapterOptions::default());
        assert!(dataset.header.is_empty());
        assert!(dataset.rows.is_empty());
        assert_eq!(dataset.skipped_leading_rows, 2);
    }

    #[test]
    fn numbers_are_not_coerced() {
        let sheet = Sheet::new(
            "s",
            vec![text_row(&["n"]), vec![Cell::Number(5.0)]],
        );
        let dataset = adapt_sheet(&sheet, &AdapterOptions::default());
        assert_eq!(dataset.rows[0][0], Cell::Number(5.0));
    }
}
