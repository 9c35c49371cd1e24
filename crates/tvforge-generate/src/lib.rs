//! Synthetic television dataset generation.
//!
//! This crate samples the driver attributes for each record, derives the
//! dependent fields with the correlation rules, and exports finished datasets
//! as CSV, JSON, or XLSX.

pub mod derive;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod sku;

pub use engine::{DatasetGenerator, GenerationOutcome};
pub use errors::{ExportError, GenerationError};
pub use model::{GenerateOptions, GenerationReport};
pub use output::{OutputFormat, export_dataset, read_csv_dataset};
