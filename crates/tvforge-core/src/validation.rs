use std::collections::HashSet;

use chrono::Datelike;

use crate::error::{Error, Result};
use crate::record::{Dataset, TvRecord, split_multi};
use crate::registry;

/// Validate a single record against the declared field invariants.
///
/// This checks:
/// - SKU shape (two uppercase letters + six digits)
/// - pool membership for every categorical field
/// - numeric ranges (price, ratings, lag) and derived-value shapes
/// - release date within the first half of the manufacture year
///
/// A violation is an internal contract failure of the derivation rules, so
/// the first one found is returned as an error rather than patched over.
pub fn validate_record(record: &TvRecord) -> Result<()> {
    let sku = &record.product_sku;

    if !sku_well_formed(sku) {
        return Err(Error::InvalidRecord(format!(
            "PRODUCT_SKU '{sku}' does not match two uppercase letters + six digits"
        )));
    }

    if !registry::SCREEN_SIZES_INCHES.contains(&record.screen_size_inches) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: SCREEN_SIZE_INCHES {} outside the declared pool",
            record.screen_size_inches
        )));
    }

    if !record.price_usd.is_finite() || record.price_usd <= 0.0 {
        return Err(Error::InvalidRecord(format!(
            "{sku}: PRICE_USD must be positive, got {}",
            record.price_usd
        )));
    }

    if !(1..=5).contains(&record.quality_rating) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: QUALITY_RATING {} outside 1..=5",
            record.quality_rating
        )));
    }

    if !(1.0..=5.0).contains(&record.customer_rating) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: CUSTOMER_RATING {} outside [1.0, 5.0]",
            record.customer_rating
        )));
    }

    if !registry::REFRESH_RATES_HZ.contains(&record.refresh_rate_hz) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: REFRESH_RATE_HZ {} outside the declared pool",
            record.refresh_rate_hz
        )));
    }

    for format in split_multi(&record.hdr_formats) {
        if !registry::HDR_FORMATS.contains(&format) {
            return Err(Error::InvalidRecord(format!(
                "{sku}: HDR_FORMATS entry '{format}' outside the declared pool"
            )));
        }
    }

    if !registry::HDMI_PORT_COUNTS.contains(&record.hdmi_ports) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: HDMI_PORTS {} outside the declared pool",
            record.hdmi_ports
        )));
    }

    if !registry::USB_PORT_COUNTS.contains(&record.usb_ports) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: USB_PORTS {} outside the declared pool",
            record.usb_ports
        )));
    }

    if record.audio_output_watts % 5 != 0 {
        return Err(Error::InvalidRecord(format!(
            "{sku}: AUDIO_OUTPUT_WATTS {} is not a multiple of 5",
            record.audio_output_watts
        )));
    }

    if !registry::VOICE_ASSISTANTS.contains(&record.voice_assistant.as_str()) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: VOICE_ASSISTANT '{}' outside the declared pool",
            record.voice_assistant
        )));
    }

    if !registry::TUNER_TYPES.contains(&record.tuner_type.as_str()) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: TUNER_TYPE '{}' outside the declared pool",
            record.tuner_type
        )));
    }

    if !registry::MANUFACTURE_YEARS.contains(&record.manufacture_year) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: MANUFACTURE_YEAR {} outside the declared range",
            record.manufacture_year
        )));
    }

    if !registry::ENERGY_RATINGS.contains(&record.energy_rating.as_str()) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: ENERGY_RATING '{}' outside the declared pool",
            record.energy_rating
        )));
    }

    if !registry::COUNTRIES_OF_ORIGIN.contains(&record.country_of_origin.as_str()) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: COUNTRY_OF_ORIGIN '{}' outside the declared pool",
            record.country_of_origin
        )));
    }

    if !supplier_well_formed(&record.supplier_id) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: SUPPLIER_ID '{}' does not match SUP + four digits",
            record.supplier_id
        )));
    }

    if !registry::WAREHOUSE_LOCATIONS.contains(&record.warehouse_location.as_str()) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: WAREHOUSE_LOCATION '{}' outside the declared pool",
            record.warehouse_location
        )));
    }

    if !record.weight_kg.is_finite() || record.weight_kg <= 0.0 {
        return Err(Error::InvalidRecord(format!(
            "{sku}: WEIGHT_KG must be positive, got {}",
            record.weight_kg
        )));
    }

    if !dimensions_well_formed(&record.dimensions_cm) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: DIMENSIONS_CM '{}' does not match '<w>W x <h>H x <d>D'",
            record.dimensions_cm
        )));
    }

    if !registry::WARRANTY_YEARS.contains(&record.warranty_years) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: WARRANTY_YEARS {} outside the declared pool",
            record.warranty_years
        )));
    }

    if record.release_date.year() != record.manufacture_year || record.release_date.month() > 6 {
        return Err(Error::InvalidRecord(format!(
            "{sku}: RELEASE_DATE {} outside the first half of manufacture year {}",
            record.release_date, record.manufacture_year
        )));
    }

    if !registry::COLORS.contains(&record.color.as_str()) {
        return Err(Error::InvalidRecord(format!(
            "{sku}: COLOR '{}' outside the declared pool",
            record.color
        )));
    }

    for cert in split_multi(&record.eco_certifications) {
        if !registry::ECO_CERTIFICATIONS.contains(&cert) {
            return Err(Error::InvalidRecord(format!(
                "{sku}: ECO_CERTIFICATIONS entry '{cert}' outside the declared pool"
            )));
        }
    }

    if record.input_lag_ms < 1 {
        return Err(Error::InvalidRecord(format!(
            "{sku}: INPUT_LAG_MS must be at least 1"
        )));
    }

    Ok(())
}

/// Validate a whole dataset: every record, plus SKU uniqueness across rows.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let mut seen = HashSet::with_capacity(dataset.len());
    for record in dataset.iter() {
        validate_record(record)?;
        if !seen.insert(record.product_sku.as_str()) {
            return Err(Error::InvalidDataset(format!(
                "duplicate PRODUCT_SKU: {}",
                record.product_sku
            )));
        }
    }
    Ok(())
}

fn sku_well_formed(sku: &str) -> bool {
    let bytes = sku.as_bytes();
    bytes.len() == 8
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

fn supplier_well_formed(supplier_id: &str) -> bool {
    supplier_id
        .strip_prefix("SUP")
        .is_some_and(|digits| digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn dimensions_well_formed(value: &str) -> bool {
    let mut parts = value.split(" x ");
    let (Some(width), Some(height), Some(depth)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    parts.next().is_none()
        && axis_well_formed(width, 'W', false)
        && axis_well_formed(height, 'H', false)
        && axis_well_formed(depth, 'D', true)
}

fn axis_well_formed(part: &str, suffix: char, allow_decimal: bool) -> bool {
    let Some(number) = part.strip_suffix(suffix) else {
        return false;
    };
    match number.split_once('.') {
        Some((int, frac)) if allow_decimal => {
            !int.is_empty()
                && !frac.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        Some(_) => false,
        None => !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()),
    }
}
