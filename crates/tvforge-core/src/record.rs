use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::registry::{self, Brand, DisplayTechnology, Resolution, SmartPlatform};

/// One synthetic television product.
///
/// Field order matches the canonical column order exactly, and the serialized
/// names are the case-sensitive column names downstream consumers rely on.
/// Multi-value fields (`hdr_formats`, `eco_certifications`) hold a
/// comma-joined subset of their pool or the literal `"None"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TvRecord {
    pub product_sku: String,
    pub brand: Brand,
    pub model: String,
    pub display_technology: DisplayTechnology,
    pub screen_size_inches: u32,
    pub resolution: Resolution,
    pub price_usd: f64,
    pub quality_rating: u8,
    pub refresh_rate_hz: u32,
    pub smart_tv_platform: SmartPlatform,
    pub hdr_formats: String,
    pub hdmi_ports: u8,
    pub usb_ports: u8,
    pub audio_output_watts: u32,
    pub has_wifi: bool,
    pub has_bluetooth: bool,
    pub voice_assistant: String,
    pub tuner_type: String,
    pub manufacture_year: i32,
    pub energy_rating: String,
    pub country_of_origin: String,
    pub supplier_id: String,
    pub warehouse_location: String,
    pub stock_quantity: u32,
    pub customer_rating: f64,
    pub is_curved: bool,
    pub weight_kg: f64,
    pub dimensions_cm: String,
    pub warranty_years: u8,
    pub release_date: NaiveDate,
    pub color: String,
    pub eco_certifications: String,
    pub power_consumption_watts: u32,
    pub input_lag_ms: u32,
}

/// An ordered, fixed-schema collection of generated records.
///
/// Built in one generation pass and immutable afterwards; consumers that need
/// derived columns (price segments, for instance) compute them locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TvRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TvRecord>) -> Self {
        Self { records }
    }

    /// Canonical column header, independent of row count.
    pub fn columns() -> &'static [&'static str] {
        &registry::COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TvRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[TvRecord] {
        &self.records
    }
}

/// Join a multi-value subset into its serialized form: comma-separated, or
/// the literal `"None"` when empty.
pub fn join_multi(values: &[&str]) -> String {
    if values.is_empty() {
        registry::NONE_LITERAL.to_string()
    } else {
        values.join(",")
    }
}

/// Inverse of [`join_multi`]: the member list encoded by a serialized field.
pub fn split_multi(value: &str) -> Vec<&str> {
    if value == registry::NONE_LITERAL {
        Vec::new()
    } else {
        value.split(',').collect()
    }
}
