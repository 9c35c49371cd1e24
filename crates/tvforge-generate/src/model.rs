use serde::{Deserialize, Serialize};

/// Options for one dataset generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of records to generate.
    pub rows: u64,
    /// PRNG seed; a fresh one is drawn from OS entropy when absent.
    pub seed: Option<u64>,
    /// Validate every record against the dataset invariants as it is built.
    pub strict: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rows: 1000,
            seed: None,
            strict: true,
        }
    }
}

/// Summary of a generation run. The effective seed is always recorded so any
/// run can be replayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub dataset_version: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub seed: u64,
    pub sku_retries: u64,
    pub duration_ms: u64,
}
