use chrono::NaiveDate;

use tvforge_core::record::{Dataset, TvRecord, join_multi, split_multi};
use tvforge_core::registry::{Brand, DisplayTechnology, Resolution, SmartPlatform};
use tvforge_core::{validate_dataset, validate_record};

fn sample_record() -> TvRecord {
    TvRecord {
        product_sku: "AB123456".to_string(),
        brand: Brand::Samsung,
        model: "QN55Q80TA".to_string(),
        display_technology: DisplayTechnology::Qled,
        screen_size_inches: 55,
        resolution: Resolution::Uhd4k,
        price_usd: 1499.99,
        quality_rating: 4,
        refresh_rate_hz: 120,
        smart_tv_platform: SmartPlatform::Tizen,
        hdr_formats: "HDR10,HLG".to_string(),
        hdmi_ports: 3,
        usb_ports: 2,
        audio_output_watts: 40,
        has_wifi: true,
        has_bluetooth: true,
        voice_assistant: "Bixby".to_string(),
        tuner_type: "ATSC".to_string(),
        manufacture_year: 2023,
        energy_rating: "A+".to_string(),
        country_of_origin: "Corea del Sur".to_string(),
        supplier_id: "SUP1234".to_string(),
        warehouse_location: "Seúl".to_string(),
        stock_quantity: 42,
        customer_rating: 4.3,
        is_curved: false,
        weight_kg: 17.2,
        dimensions_cm: "121W x 68H x 6.1D".to_string(),
        warranty_years: 2,
        release_date: NaiveDate::from_ymd_opt(2023, 3, 15).expect("valid date"),
        color: "Negro".to_string(),
        eco_certifications: "Energy Star,RoHS".to_string(),
        power_consumption_watts: 90,
        input_lag_ms: 12,
    }
}

#[test]
fn valid_record_passes() {
    validate_record(&sample_record()).expect("sample record should be valid");
}

#[test]
fn rejects_malformed_sku() {
    let mut record = sample_record();
    record.product_sku = "ab123456".to_string();
    assert!(validate_record(&record).is_err());

    record.product_sku = "AB12345".to_string();
    assert!(validate_record(&record).is_err());

    record.product_sku = "ABC12345".to_string();
    assert!(validate_record(&record).is_err());
}

#[test]
fn rejects_nonpositive_price() {
    let mut record = sample_record();
    record.price_usd = 0.0;
    assert!(validate_record(&record).is_err());
}

#[test]
fn rejects_quality_outside_scale() {
    let mut record = sample_record();
    record.quality_rating = 0;
    assert!(validate_record(&record).is_err());
    record.quality_rating = 6;
    assert!(validate_record(&record).is_err());
}

#[test]
fn rejects_customer_rating_outside_scale() {
    let mut record = sample_record();
    record.customer_rating = 5.2;
    assert!(validate_record(&record).is_err());
    record.customer_rating = 0.9;
    assert!(validate_record(&record).is_err());
}

#[test]
fn rejects_values_outside_pools() {
    let mut record = sample_record();
    record.color = "Verde".to_string();
    assert!(validate_record(&record).is_err());

    let mut record = sample_record();
    record.hdr_formats = "HDR10,HDR11".to_string();
    assert!(validate_record(&record).is_err());

    let mut record = sample_record();
    record.voice_assistant = "Cortana".to_string();
    assert!(validate_record(&record).is_err());

    let mut record = sample_record();
    record.refresh_rate_hz = 100;
    assert!(validate_record(&record).is_err());
}

#[test]
fn rejects_release_date_outside_first_half() {
    let mut record = sample_record();
    record.release_date = NaiveDate::from_ymd_opt(2023, 7, 1).expect("valid date");
    assert!(validate_record(&record).is_err());

    let mut record = sample_record();
    record.release_date = NaiveDate::from_ymd_opt(2022, 3, 15).expect("valid date");
    assert!(validate_record(&record).is_err());
}

#[test]
fn rejects_malformed_dimensions() {
    let mut record = sample_record();
    for bad in ["121 x 68 x 6", "121W x 68H", "121W x 68H x D", "W x H x D"] {
        record.dimensions_cm = bad.to_string();
        assert!(
            validate_record(&record).is_err(),
            "dimensions '{bad}' should be rejected"
        );
    }

    record.dimensions_cm = "121W x 68H x 6D".to_string();
    validate_record(&record).expect("integer depth is allowed");
}

#[test]
fn dataset_rejects_duplicate_skus() {
    let dataset = Dataset::new(vec![sample_record(), sample_record()]);
    assert!(validate_dataset(&dataset).is_err());
}

#[test]
fn multi_value_encoding_round_trips() {
    assert_eq!(join_multi(&[]), "None");
    assert_eq!(join_multi(&["HDR10", "HLG"]), "HDR10,HLG");
    assert_eq!(split_multi("None"), Vec::<&str>::new());
    assert_eq!(split_multi("HDR10,HLG"), vec!["HDR10", "HLG"]);
}
