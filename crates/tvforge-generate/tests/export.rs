use std::fs;
use std::path::PathBuf;

use tvforge_core::registry::COLUMNS;
use tvforge_generate::{
    DatasetGenerator, GenerateOptions, OutputFormat, export_dataset, read_csv_dataset,
};

fn generate(rows: u64, seed: u64) -> tvforge_core::Dataset {
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

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("tvforge_export_{label}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn unsupported_format_is_a_descriptive_error() {
    let err = "invalid".parse::<OutputFormat>().expect_err("must fail");
    let message = err.to_string();
    assert!(message.contains("'invalid'"), "message: {message}");
    assert!(message.contains("csv, json, xlsx"), "message: {message}");
}

#[test]
fn format_parsing_accepts_known_names() {
    assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("xlsx".parse::<OutputFormat>().unwrap(), OutputFormat::Xlsx);
    assert_eq!("excel".parse::<OutputFormat>().unwrap(), OutputFormat::Xlsx);
}

#[test]
fn csv_round_trip_preserves_every_field() {
    let dataset = generate(50, 77);
    let base = temp_dir("roundtrip").join("tv_data");

    let path = export_dataset(&dataset, &base, OutputFormat::Csv).expect("export");
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

    let reloaded = read_csv_dataset(&path).expect("read back");
    assert_eq!(dataset, reloaded);
}

#[test]
fn csv_export_of_empty_dataset_keeps_header() {
    let dataset = generate(0, 5);
    let base = temp_dir("empty").join("tv_data");

    let path = export_dataset(&dataset, &base, OutputFormat::Csv).expect("export");
    let contents = fs::read_to_string(&path).expect("read csv");

    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(COLUMNS.join(",").as_str()));
    assert_eq!(lines.next(), None);

    let reloaded = read_csv_dataset(&path).expect("read back");
    assert!(reloaded.is_empty());
}

#[test]
fn json_export_is_an_array_of_records() {
    let dataset = generate(10, 13);
    let base = temp_dir("json").join("tv_data");

    let path = export_dataset(&dataset, &base, OutputFormat::Json).expect("export");
    let contents = fs::read_to_string(&path).expect("read json");
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&contents).expect("parse json");

    assert_eq!(parsed.len(), 10);
    for record in &parsed {
        assert!(record.get("PRODUCT_SKU").is_some());
        assert!(record["HAS_WIFI"].is_boolean());
        assert!(record["PRICE_USD"].is_number());
    }
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let dataset = generate(5, 19);
    let base = temp_dir("xlsx").join("tv_data");

    let path = export_dataset(&dataset, &base, OutputFormat::Xlsx).expect("export");
    let metadata = fs::metadata(&path).expect("stat xlsx");
    assert!(metadata.len() > 0);
}

#[test]
fn export_keeps_an_existing_matching_extension() {
    let dataset = generate(1, 3);
    let dir = temp_dir("extension");

    let explicit = dir.join("named.csv");
    let path = export_dataset(&dataset, &explicit, OutputFormat::Csv).expect("export");
    assert_eq!(path, explicit);

    let bare = dir.join("named");
    let path = export_dataset(&dataset, &bare, OutputFormat::Csv).expect("export");
    assert_eq!(path, dir.join("named.csv"));
}
