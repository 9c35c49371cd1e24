//! Export layer: serialize a finished dataset to one of the supported
//! on-disk representations.

pub mod csv;
pub mod json;
pub mod xlsx;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use tvforge_core::Dataset;

use crate::errors::ExportError;

pub use csv::read_csv_dataset;

const SUPPORTED_FORMATS: &str = "csv, json, xlsx";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Xlsx,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Xlsx => "xlsx",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            // "excel" kept as an alias for compatibility with older tooling.
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            _ => Err(ExportError::UnsupportedFormat {
                requested: value.to_string(),
                supported: SUPPORTED_FORMATS,
            }),
        }
    }
}

/// Serialize `dataset` under `base` in the requested format and return the
/// path written. The format extension is appended unless `base` already
/// carries it. The file is written in a single pass.
pub fn export_dataset(
    dataset: &Dataset,
    base: &Path,
    format: OutputFormat,
) -> Result<PathBuf, ExportError> {
    let path = resolve_path(base, format.extension());
    let bytes = match format {
        OutputFormat::Csv => csv::write_csv(&path, dataset)?,
        OutputFormat::Json => json::write_json(&path, dataset)?,
        OutputFormat::Xlsx => xlsx::write_xlsx(&path, dataset)?,
    };

    info!(
        path = %path.display(),
        format = format.extension(),
        rows = dataset.len(),
        bytes,
        "dataset exported"
    );
    Ok(path)
}

fn resolve_path(base: &Path, extension: &str) -> PathBuf {
    if base.extension().is_some_and(|ext| ext == extension) {
        base.to_path_buf()
    } else {
        let mut path = base.as_os_str().to_os_string();
        path.push(".");
        path.push(extension);
        PathBuf::from(path)
    }
}
