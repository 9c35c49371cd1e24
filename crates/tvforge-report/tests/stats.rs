use chrono::NaiveDate;

use tvforge_core::record::{Dataset, TvRecord};
use tvforge_core::registry::{Brand, DisplayTechnology, Resolution, SmartPlatform};
use tvforge_generate::{DatasetGenerator, GenerateOptions};
use tvforge_report::{PriceSegment, compute_summary, pearson, render_summary};

fn record(sku: &str, price: f64, quality: u8, size: u32) -> TvRecord {
    TvRecord {
        product_sku: sku.to_string(),
        brand: Brand::TCL,
        model: "AB-551234".to_string(),
        display_technology: DisplayTechnology::Led,
        screen_size_inches: size,
        resolution: Resolution::FullHd,
        price_usd: price,
        quality_rating: quality,
        refresh_rate_hz: 60,
        smart_tv_platform: SmartPlatform::RokuTv,
        hdr_formats: "None".to_string(),
        hdmi_ports: 2,
        usb_ports: 1,
        audio_output_watts: 15,
        has_wifi: true,
        has_bluetooth: false,
        voice_assistant: "None".to_string(),
        tuner_type: "ATSC".to_string(),
        manufacture_year: 2022,
        energy_rating: "B".to_string(),
        country_of_origin: "China".to_string(),
        supplier_id: "SUP2000".to_string(),
        warehouse_location: "Chicago".to_string(),
        stock_quantity: 30,
        customer_rating: f64::from(quality),
        is_curved: false,
        weight_kg: 12.0,
        dimensions_cm: "110W x 62H x 6.0D".to_string(),
        warranty_years: 1,
        release_date: NaiveDate::from_ymd_opt(2022, 4, 1).expect("valid date"),
        color: "Negro".to_string(),
        eco_certifications: "None".to_string(),
        power_consumption_watts: 80,
        input_lag_ms: 28,
    }
}

fn generate(rows: u64, seed: u64) -> Dataset {
    let options = GenerateOptions {
        rows,
        seed: Some(seed),
        strict: true,
    };
    DatasetGenerator::new(options)
        .run()
        .expect("generation")
        .dataset
}

#[test]
fn price_segments_follow_tier_bands() {
    assert_eq!(PriceSegment::of(300.0), PriceSegment::Basico);
    assert_eq!(PriceSegment::of(500.0), PriceSegment::Medio);
    assert_eq!(PriceSegment::of(1499.99), PriceSegment::Medio);
    assert_eq!(PriceSegment::of(2000.0), PriceSegment::Premium);
    assert_eq!(PriceSegment::of(3000.0), PriceSegment::GamaAlta);
}

#[test]
fn summary_statistics_are_exact_on_a_small_dataset() {
    let dataset = Dataset::new(vec![
        record("AA100001", 400.0, 2, 32),
        record("AA100002", 800.0, 3, 50),
        record("AA100003", 2000.0, 4, 65),
        record("AA100004", 5000.0, 5, 85),
    ]);
    let summary = compute_summary(&dataset);

    assert_eq!(summary.total_records, 4);
    assert_eq!(summary.brand_count, 1);
    assert!((summary.avg_price - 2050.0).abs() < 1e-9);
    assert!((summary.median_price - 1400.0).abs() < 1e-9);
    assert!((summary.min_price - 400.0).abs() < 1e-9);
    assert!((summary.max_price - 5000.0).abs() < 1e-9);
    assert!((summary.avg_quality - 3.5).abs() < 1e-9);

    for segment in PriceSegment::ALL {
        assert_eq!(summary.segment_distribution.get(segment.as_str()), Some(&1));
    }
    assert_eq!(summary.size_distribution.get(&32), Some(&1));
    assert_eq!(summary.resolution_distribution.get("Full HD"), Some(&4));
}

#[test]
fn summary_of_empty_dataset_is_all_zeroes() {
    let summary = compute_summary(&Dataset::default());
    assert_eq!(summary.total_records, 0);
    assert_eq!(summary.avg_price, 0.0);
    assert_eq!(summary.median_price, 0.0);
    assert!(summary.size_distribution.is_empty());
}

#[test]
fn pearson_detects_known_relationships() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let doubled = [2.0, 4.0, 6.0, 8.0];
    let inverted = [8.0, 6.0, 4.0, 2.0];
    let constant = [5.0, 5.0, 5.0, 5.0];

    assert!((pearson(&xs, &doubled) - 1.0).abs() < 1e-9);
    assert!((pearson(&xs, &inverted) + 1.0).abs() < 1e-9);
    assert_eq!(pearson(&xs, &constant), 0.0);
    assert_eq!(pearson(&xs, &xs[..2]), 0.0);
}

#[test]
fn generated_data_carries_the_expected_correlations() {
    let dataset = generate(300, 7);

    let sizes: Vec<f64> = dataset
        .iter()
        .map(|r| f64::from(r.screen_size_inches))
        .collect();
    let prices: Vec<f64> = dataset.iter().map(|r| r.price_usd).collect();
    let qualities: Vec<f64> = dataset
        .iter()
        .map(|r| f64::from(r.quality_rating))
        .collect();

    assert!(
        pearson(&sizes, &prices) > 0.3,
        "size/price correlation too weak: {}",
        pearson(&sizes, &prices)
    );
    assert!(
        pearson(&qualities, &prices) > 0.3,
        "quality/price correlation too weak: {}",
        pearson(&qualities, &prices)
    );

    let (oled_sum, oled_count, other_sum, other_count) = dataset.iter().fold(
        (0.0, 0u64, 0.0, 0u64),
        |(oled_sum, oled_count, other_sum, other_count), r| {
            if r.display_technology == DisplayTechnology::Oled {
                (oled_sum + r.price_usd, oled_count + 1, other_sum, other_count)
            } else {
                (oled_sum, oled_count, other_sum + r.price_usd, other_count + 1)
            }
        },
    );
    assert!(oled_count > 0, "sample contains no OLED rows");
    let oled_mean = oled_sum / oled_count as f64;
    let other_mean = other_sum / other_count as f64;
    assert!(
        oled_mean > other_mean,
        "OLED mean {oled_mean} not above non-OLED mean {other_mean}"
    );
}

#[test]
fn rendered_summary_has_the_fixed_format() {
    let dataset = Dataset::new(vec![
        record("AA100001", 400.0, 2, 32),
        record("AA100002", 800.0, 3, 50),
        record("AA100003", 2000.0, 4, 65),
        record("AA100004", 5000.0, 5, 85),
    ]);
    let text = render_summary(&compute_summary(&dataset));

    assert!(text.starts_with("TELEVISION DATASET SUMMARY"));
    assert!(text.contains("Total records: 4"));
    assert!(text.contains("Average price: $2050.00"));
    assert!(text.contains("Median price: $1400.00"));
    assert!(text.contains("  Básico: 1 (25.0%)"));
    assert!(text.contains("  Full HD: 4 (100.0%)"));
    assert!(text.contains("  32\": 1 (25.0%)"));
}
