use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use tvforge_core::Dataset;

/// Price segment bucket used by summaries and charts. Local to the report
/// layer; the generated dataset itself carries no segment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSegment {
    Basico,
    Medio,
    Premium,
    GamaAlta,
}

impl PriceSegment {
    pub const ALL: [PriceSegment; 4] = [
        PriceSegment::Basico,
        PriceSegment::Medio,
        PriceSegment::Premium,
        PriceSegment::GamaAlta,
    ];

    /// Bucket a price using the registry's tier bands.
    pub fn of(price: f64) -> Self {
        if price < 500.0 {
            PriceSegment::Basico
        } else if price < 1500.0 {
            PriceSegment::Medio
        } else if price < 3000.0 {
            PriceSegment::Premium
        } else {
            PriceSegment::GamaAlta
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSegment::Basico => "Básico",
            PriceSegment::Medio => "Medio",
            PriceSegment::Premium => "Premium",
            PriceSegment::GamaAlta => "Gama Alta",
        }
    }
}

impl fmt::Display for PriceSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate descriptive statistics for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: u64,
    pub brand_count: u64,
    pub avg_price: f64,
    pub median_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_quality: f64,
    pub size_distribution: BTreeMap<u32, u64>,
    pub resolution_distribution: BTreeMap<String, u64>,
    pub segment_distribution: BTreeMap<String, u64>,
}

/// Compute summary statistics in one pass over the dataset. All figures are
/// zero for an empty dataset.
pub fn compute_summary(dataset: &Dataset) -> DatasetSummary {
    let total_records = dataset.len() as u64;

    let mut brands = HashSet::new();
    let mut price_sum = 0.0;
    let mut quality_sum = 0.0;
    let mut prices = Vec::with_capacity(dataset.len());
    let mut size_distribution = BTreeMap::new();
    let mut resolution_distribution = BTreeMap::new();
    let mut segment_distribution = BTreeMap::new();

    for record in dataset.iter() {
        brands.insert(record.brand);
        price_sum += record.price_usd;
        quality_sum += f64::from(record.quality_rating);
        prices.push(record.price_usd);

        *size_distribution
            .entry(record.screen_size_inches)
            .or_insert(0) += 1;
        *resolution_distribution
            .entry(record.resolution.to_string())
            .or_insert(0) += 1;
        *segment_distribution
            .entry(PriceSegment::of(record.price_usd).to_string())
            .or_insert(0) += 1;
    }

    prices.sort_by(f64::total_cmp);
    let count = prices.len();

    DatasetSummary {
        total_records,
        brand_count: brands.len() as u64,
        avg_price: if count > 0 {
            price_sum / count as f64
        } else {
            0.0
        },
        median_price: median_of_sorted(&prices),
        min_price: prices.first().copied().unwrap_or(0.0),
        max_price: prices.last().copied().unwrap_or(0.0),
        avg_quality: if count > 0 {
            quality_sum / count as f64
        } else {
            0.0
        },
        size_distribution,
        resolution_distribution,
        segment_distribution,
    }
}

/// Pearson correlation coefficient. Returns 0.0 when either series is
/// degenerate (constant, empty, or length-mismatched).
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.is_empty() {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        covariance / denominator
    }
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let count = values.len();
    if count == 0 {
        0.0
    } else if count % 2 == 1 {
        values[count / 2]
    } else {
        (values[count / 2 - 1] + values[count / 2]) / 2.0
    }
}
