use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use tvforge_core::{Dataset, TvRecord};

use crate::errors::ExportError;

/// Write a dataset as a single-worksheet XLSX file with typed cells, keeping
/// the canonical column order.
pub fn write_xlsx(path: &Path, dataset: &Dataset) -> Result<u64, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in Dataset::columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    for (row, record) in dataset.iter().enumerate() {
        write_row(worksheet, row as u32 + 1, record)?;
    }

    workbook.save(path)?;
    Ok(std::fs::metadata(path)?.len())
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    record: &TvRecord,
) -> Result<(), ExportError> {
    worksheet.write_string(row, 0, &record.product_sku)?;
    worksheet.write_string(row, 1, record.brand.as_str())?;
    worksheet.write_string(row, 2, &record.model)?;
    worksheet.write_string(row, 3, record.display_technology.as_str())?;
    worksheet.write_number(row, 4, f64::from(record.screen_size_inches))?;
    worksheet.write_string(row, 5, record.resolution.as_str())?;
    worksheet.write_number(row, 6, record.price_usd)?;
    worksheet.write_number(row, 7, f64::from(record.quality_rating))?;
    worksheet.write_number(row, 8, f64::from(record.refresh_rate_hz))?;
    worksheet.write_string(row, 9, record.smart_tv_platform.as_str())?;
    worksheet.write_string(row, 10, &record.hdr_formats)?;
    worksheet.write_number(row, 11, f64::from(record.hdmi_ports))?;
    worksheet.write_number(row, 12, f64::from(record.usb_ports))?;
    worksheet.write_number(row, 13, f64::from(record.audio_output_watts))?;
    worksheet.write_boolean(row, 14, record.has_wifi)?;
    worksheet.write_boolean(row, 15, record.has_bluetooth)?;
    worksheet.write_string(row, 16, &record.voice_assistant)?;
    worksheet.write_string(row, 17, &record.tuner_type)?;
    worksheet.write_number(row, 18, f64::from(record.manufacture_year))?;
    worksheet.write_string(row, 19, &record.energy_rating)?;
    worksheet.write_string(row, 20, &record.country_of_origin)?;
    worksheet.write_string(row, 21, &record.supplier_id)?;
    worksheet.write_string(row, 22, &record.warehouse_location)?;
    worksheet.write_number(row, 23, f64::from(record.stock_quantity))?;
    worksheet.write_number(row, 24, record.customer_rating)?;
    worksheet.write_boolean(row, 25, record.is_curved)?;
    worksheet.write_number(row, 26, record.weight_kg)?;
    worksheet.write_string(row, 27, &record.dimensions_cm)?;
    worksheet.write_number(row, 28, f64::from(record.warranty_years))?;
    worksheet.write_string(row, 29, &record.release_date.format("%Y-%m-%d").to_string())?;
    worksheet.write_string(row, 30, &record.color)?;
    worksheet.write_string(row, 31, &record.eco_certifications)?;
    worksheet.write_number(row, 32, f64::from(record.power_consumption_watts))?;
    worksheet.write_number(row, 33, f64::from(record.input_lag_ms))?;
    Ok(())
}
