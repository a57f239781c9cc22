use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dq_model::Sheet;

/// Assemble the export workbook: the original sheets exactly as they were
/// decoded (no coercion on round-trip), with the summary sheet appended at
/// the end, never interleaved.
pub fn export_workbook(originals: &[Sheet], summary: Sheet) -> Vec<Sheet> {
    let mut sheets: Vec<Sheet> = originals.to_vec();
    sheets.push(summary);
    sheets
}

/// Write each sheet of the workbook as one CSV file in `output_dir`.
pub fn write_workbook_csv(output_dir: &Path, sheets: &[Sheet]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let mut paths = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = output_dir.join(format!("{}.csv", sanitize_name(&sheet.name)));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("write sheet: {}", path.display()))?;
        let width = sheet.rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &sheet.rows {
            let mut record: Vec<String> = row.iter().map(|cell| cell.display()).collect();
            record.resize(width, String::new());
            writer
                .write_record(&record)
                .with_context(|| format!("write sheet: {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("write sheet: {}", path.display()))?;
        paths.push(path);
    }
    Ok(paths)
}

fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    if sanitized.is_empty() {
        "sheet".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_model::Cell;

    #[test]
    fn summary_is_appended_last_and_originals_are_untouched() {
        let originals = vec![
            Sheet::new("one", vec![vec![Cell::Number(1.5)]]),
            Sheet::new("two", vec![vec![Cell::from("x")]]),
        ];
        let summary = Sheet::new("Validation Summary", Vec::new());
        let workbook = export_workbook(&originals, summary);
        assert_eq!(workbook.len(), 3);
        assert_eq!(workbook[0].name, "one");
        assert_eq!(workbook[0].rows[0][0], Cell::Number(1.5));
        assert_eq!(workbook[2].name, "Validation Summary");
    }

    #[test]
    fn writes_one_csv_per_sheet() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sheets = vec![Sheet::new(
            "My Sheet!",
            vec![
                vec![Cell::from("a"), Cell::from("b")],
                vec![Cell::Number(1.0)],
            ],
        )];
        let paths = write_workbook_csv(dir.path(), &sheets).expect("write workbook");
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("My_Sheet_.csv"));
        let content = std::fs::read_to_string(&paths[0]).expect("read back");
        assert_eq!(content, "a,b\n1,\n");
    }
}
