use std::path::Path;

use anyhow::{Context, Result};

use dq_model::DataDictionary;

/// Load a persisted dictionary document from disk.
///
/// Accepts both a bare rules array and the `{"rules_json": [...]}` wrapper
/// the storage layer persists; see [`DataDictionary::from_json_str`].
pub fn load_dictionary(path: &Path) -> Result<DataDictionary> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dictionary".to_string());
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("read dictionary: {}", path.display()))?;
    DataDictionary::from_json_str(name, &document)
        .with_context(|| format!("parse dictionary: {}", path.display()))
}
