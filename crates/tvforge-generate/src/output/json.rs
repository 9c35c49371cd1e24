use std::path::Path;

use tvforge_core::Dataset;

use crate::errors::ExportError;

/// Write a dataset as a pretty-printed JSON array of records. Field names
/// equal the canonical column names.
pub fn write_json(path: &Path, dataset: &Dataset) -> Result<u64, ExportError> {
    let buf = serde_json::to_vec_pretty(dataset.records())?;
    std::fs::write(path, &buf)?;
    Ok(buf.len() as u64)
}
