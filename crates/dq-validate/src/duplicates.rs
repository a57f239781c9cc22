use std::collections::HashMap;

use dq_model::{Dataset, DuplicateRecord};

/// Separator used when joining a row's cells into a fingerprint. Chosen to
/// never occur inside real cell content, so cell boundaries stay unambiguous.
pub const FINGERPRINT_SEPARATOR: &str = "~!~";

/// Flag repeated rows by exact-match fingerprinting of the full trimmed row
/// content (missing cells normalize to the empty string, cell order
/// matters). Entirely rule-independent: runs with or without a dictionary.
pub fn find_duplicates(dataset: &Dataset) -> Vec<DuplicateRecord> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut records = Vec::new();

    for (index, row) in dataset.rows.iter().enumerate() {
        let fingerprint = row
            .iter()
            .map(|cell| cell.display().trim().to_string())
            .collect::<Vec<_>>()
            .join(FINGERPRINT_SEPARATOR);

        match first_seen.get(&fingerprint) {
            Some(&first) => records.push(DuplicateRecord {
                sheet: dataset.sheet_name.clone(),
                row: Dataset::row_number(index),
                first_seen_row: Dataset::row_number(first),
            }),
            None => {
                first_seen.insert(fingerprint, index);
            }
        }
    }

    records
}
