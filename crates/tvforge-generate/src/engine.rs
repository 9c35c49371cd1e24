use std::collections::HashSet;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tvforge_core::{DATASET_VERSION, Dataset, validate_record};

use crate::derive::derive_record;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::sku::unique_sku;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating television datasets.
///
/// One run owns one seeded ChaCha8 stream and the SKU uniqueness set; with a
/// fixed seed the produced dataset is bit-identical across runs.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    options: GenerateOptions,
}

impl DatasetGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationOutcome, GenerationError> {
        let start = Instant::now();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            rows = self.options.rows,
            seed,
            strict = self.options.strict,
            "generation started"
        );

        let rows = self.options.rows as usize;
        let mut records = Vec::with_capacity(rows);
        let mut issued = HashSet::with_capacity(rows);
        let mut sku_retries = 0;

        for _ in 0..self.options.rows {
            let (sku, retries) = unique_sku(&mut rng, &issued);
            sku_retries += retries;
            issued.insert(sku.clone());

            let record = derive_record(sku, &mut rng);
            if self.options.strict {
                validate_record(&record)?;
            }
            records.push(record);
        }

        let dataset = Dataset::new(records);
        let report = GenerationReport {
            dataset_version: DATASET_VERSION.to_string(),
            rows_requested: self.options.rows,
            rows_generated: dataset.len() as u64,
            seed,
            sku_retries,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            rows_generated = report.rows_generated,
            sku_retries = report.sku_retries,
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(GenerationOutcome { dataset, report })
    }
}
