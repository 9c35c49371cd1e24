//! Field derivation rules.
//!
//! Each record starts from four independently sampled drivers (brand, panel
//! technology, screen size, resolution); every other field is a closed-form
//! function of drivers, earlier derived fields, and bounded noise. The draw
//! order inside [`derive_record`] is fixed — reordering it changes seeded
//! output.

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use tvforge_core::record::{TvRecord, join_multi};
use tvforge_core::registry::{
    self, Brand, BrandTier, DisplayTechnology, Resolution, SmartPlatform,
};

/// Series alphabet for model names; I and O are skipped to avoid confusion
/// with 1 and 0.
const SERIES_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Derive one fully populated record for the given SKU.
pub fn derive_record(sku: String, rng: &mut impl Rng) -> TvRecord {
    let brand = pick(rng, &Brand::ALL);
    let technology = pick(rng, &DisplayTechnology::ALL);
    let size = pick(rng, &registry::SCREEN_SIZES_INCHES);
    let resolution = pick(rng, &Resolution::ALL);

    let model = model_name(rng, brand, size, technology);
    let price = price_usd(rng, brand, size, resolution, technology);
    let manufacture_year = rng.random_range(registry::MANUFACTURE_YEARS);
    let release_date = release_date(rng, manufacture_year);
    let quality_rating = quality_rating(rng, brand, price);
    let customer_rating = customer_rating(rng, quality_rating);
    let refresh_rate = refresh_rate(rng, technology, price);
    let platform = pick(rng, &SmartPlatform::ALL);
    let hdr_formats = hdr_formats(rng, price, resolution);
    let hdmi_ports = port_count(rng, price, &registry::HDMI_PORT_COUNTS);
    let usb_ports = port_count(rng, price, &registry::USB_PORT_COUNTS);
    let has_wifi = rng.random_bool(0.95);
    let has_bluetooth = rng.random_bool(0.75);
    let audio_watts = audio_output_watts(size, price);
    let voice_assistant = voice_assistant(rng, price, platform);
    let is_curved = rng.random_bool(0.15);
    let weight_kg = weight_kg(rng, size, technology);
    let dimensions_cm = dimensions_cm(rng, size);
    let energy_rating = pick(rng, &registry::ENERGY_RATINGS);
    let power_watts = power_consumption_watts(rng, size, technology);
    let input_lag_ms = input_lag_ms(rng, refresh_rate, technology);
    let supplier_id = format!("SUP{}", rng.random_range(1000..=9999));
    let warehouse = pick(rng, &registry::WAREHOUSE_LOCATIONS);
    let stock_quantity = stock_quantity(rng);
    let tuner = pick(rng, &registry::TUNER_TYPES);
    let warranty = pick(rng, &registry::WARRANTY_YEARS);
    let color = pick(rng, &registry::COLORS);
    let eco_certifications = eco_certifications(rng, brand, price);
    let country = pick(rng, &registry::COUNTRIES_OF_ORIGIN);

    TvRecord {
        product_sku: sku,
        brand,
        model,
        display_technology: technology,
        screen_size_inches: size,
        resolution,
        price_usd: price,
        quality_rating,
        refresh_rate_hz: refresh_rate,
        smart_tv_platform: platform,
        hdr_formats,
        hdmi_ports,
        usb_ports,
        audio_output_watts: audio_watts,
        has_wifi,
        has_bluetooth,
        voice_assistant,
        tuner_type: tuner.to_string(),
        manufacture_year,
        energy_rating: energy_rating.to_string(),
        country_of_origin: country.to_string(),
        supplier_id,
        warehouse_location: warehouse.to_string(),
        stock_quantity,
        customer_rating,
        is_curved,
        weight_kg,
        dimensions_cm,
        warranty_years: warranty,
        release_date,
        color: color.to_string(),
        eco_certifications,
        power_consumption_watts: power_watts,
        input_lag_ms,
    }
}

/// Uniform pick from a non-empty constant pool.
fn pick<T: Copy>(rng: &mut impl Rng, pool: &[T]) -> T {
    pool[rng.random_range(0..pool.len())]
}

/// Premium brands carry technology-specific prefixes; everything else gets a
/// generic `XX-<size><4 digits>` pattern.
fn model_name(rng: &mut impl Rng, brand: Brand, size: u32, technology: DisplayTechnology) -> String {
    if brand.tier() == BrandTier::Premium {
        let prefix = match (brand, technology) {
            (Brand::Samsung, DisplayTechnology::Qled) => "QN",
            (Brand::LG, DisplayTechnology::Oled) => "OLED",
            (Brand::Sony, _) => "XBR-",
            _ => "",
        };
        let series = pick(rng, SERIES_LETTERS) as char;
        let model_num = format!("{}{}", rng.random_range(1..=9), pick(rng, DIGITS) as char);
        let suffix: String = (0..2).map(|_| pick(rng, SERIES_LETTERS) as char).collect();
        format!("{prefix}{size}{series}{model_num}{suffix}")
    } else {
        let prefix: String = (0..2).map(|_| pick(rng, SERIES_LETTERS) as char).collect();
        let digits: String = (0..4).map(|_| pick(rng, DIGITS) as char).collect();
        format!("{prefix}-{size}{digits}")
    }
}

/// Price rises with size, brand tier, resolution, and panel technology, with
/// ±15% noise. Rounded to cents.
fn price_usd(
    rng: &mut impl Rng,
    brand: Brand,
    size: u32,
    resolution: Resolution,
    technology: DisplayTechnology,
) -> f64 {
    let brand_factor = match brand.tier() {
        BrandTier::Premium => 1.5,
        BrandTier::Mid => 1.2,
        BrandTier::Value => 1.0,
    };
    let resolution_mult = match resolution {
        Resolution::Hd => 0.7,
        Resolution::FullHd => 1.0,
        Resolution::Uhd4k => 1.5,
        Resolution::Uhd8k => 3.0,
    };
    let tech_mult = match technology {
        DisplayTechnology::Lcd => 0.8,
        DisplayTechnology::Led => 1.0,
        DisplayTechnology::Plasma => 1.2,
        DisplayTechnology::Qled => 1.5,
        DisplayTechnology::MiniLed => 1.8,
        DisplayTechnology::Oled => 2.0,
        DisplayTechnology::MicroLed => 3.0,
    };

    let base = f64::from(size) * 10.0;
    let price = base * brand_factor * resolution_mult * tech_mult * rng.random_range(0.85..1.15);
    (price * 100.0).round() / 100.0
}

/// Quality blends a tier-dependent base with a price factor normalized by a
/// fixed 3000 USD reference, then clamps to the 1-5 star scale.
fn quality_rating(rng: &mut impl Rng, brand: Brand, price: f64) -> u8 {
    let base = match brand.tier() {
        BrandTier::Premium => rng.random_range(3.5..5.0),
        BrandTier::Mid => rng.random_range(3.0..4.5),
        BrandTier::Value => rng.random_range(2.0..4.0),
    };
    let price_factor = (price / 3000.0).min(1.0);
    let raw = base * 0.7 + price_factor * 1.5;
    (raw.round() as i64).clamp(1, 5) as u8
}

/// Customer rating is quality plus bounded noise, clamped and kept to one
/// decimal.
fn customer_rating(rng: &mut impl Rng, quality: u8) -> f64 {
    let rating = (f64::from(quality) + rng.random_range(-0.8..0.8)).clamp(1.0, 5.0);
    (rating * 10.0).round() / 10.0
}

fn refresh_rate(rng: &mut impl Rng, technology: DisplayTechnology, price: f64) -> u32 {
    let premium_panel = matches!(
        technology,
        DisplayTechnology::Oled | DisplayTechnology::Qled | DisplayTechnology::MicroLed
    );
    let pool: &[u32] = if price > 2000.0 || premium_panel {
        if rng.random_bool(0.8) {
            &[120, 144, 240]
        } else {
            &[60, 75]
        }
    } else if price > 1000.0 {
        if rng.random_bool(0.6) {
            &[120, 144]
        } else {
            &[60, 75]
        }
    } else {
        &[60, 75]
    };
    pick(rng, pool)
}

/// Independent Bernoulli draws per format, gated by price; low-resolution
/// cheap sets usually support nothing.
fn hdr_formats(rng: &mut impl Rng, price: f64, resolution: Resolution) -> String {
    let [hdr10, hdr10_plus, dolby_vision, hlg] = registry::HDR_FORMATS;

    if matches!(resolution, Resolution::Hd | Resolution::FullHd)
        && price < 500.0
        && rng.random_bool(0.8)
    {
        return join_multi(&[]);
    }

    let mut formats = Vec::new();
    if rng.random_bool(0.9) {
        formats.push(hdr10);
    }
    if price > 700.0 && rng.random_bool(0.5) {
        formats.push(hdr10_plus);
    }
    if price > 1200.0 && rng.random_bool(0.7) {
        formats.push(dolby_vision);
    }
    if price > 800.0 && rng.random_bool(0.6) {
        formats.push(hlg);
    }
    join_multi(&formats)
}

/// Port counts come from a price-tier-dependent slice of the pool.
fn port_count(rng: &mut impl Rng, price: f64, pool: &[u8]) -> u8 {
    let slice = if price < 500.0 {
        &pool[..2]
    } else if price < 1500.0 {
        &pool[1..3]
    } else {
        &pool[2..]
    };
    pick(rng, slice)
}

/// Speaker wattage scales with panel area and price, rounded to the nearest
/// multiple of 5.
fn audio_output_watts(size: u32, price: f64) -> u32 {
    let size_factor = f64::from(size) / 50.0;
    let price_factor = price / 1000.0;
    let watts = 10.0 * size_factor * (0.5 + 0.5 * price_factor);
    ((watts / 5.0).round() * 5.0) as u32
}

fn voice_assistant(rng: &mut impl Rng, price: f64, platform: SmartPlatform) -> String {
    if price < 400.0 && rng.random_bool(0.7) {
        return registry::NONE_LITERAL.to_string();
    }

    let assistant = match platform {
        SmartPlatform::AndroidTv | SmartPlatform::GoogleTv => "Google Assistant",
        SmartPlatform::WebOs | SmartPlatform::RokuTv => {
            if rng.random_bool(0.5) {
                "Alexa"
            } else {
                "Google Assistant"
            }
        }
        SmartPlatform::Tizen => {
            if rng.random_bool(0.7) {
                "Bixby"
            } else {
                "Alexa"
            }
        }
        SmartPlatform::FireTv | SmartPlatform::Vidaa => "Alexa",
        SmartPlatform::SmartCast | SmartPlatform::MyHomeScreen => {
            if rng.random_bool(0.5) {
                "Google Assistant"
            } else {
                "Alexa"
            }
        }
    };

    if price > 1500.0 && rng.random_bool(0.3) {
        return "Multiple".to_string();
    }
    assistant.to_string()
}

/// Weight grows superlinearly with the diagonal; panel technology shifts it.
fn weight_kg(rng: &mut impl Rng, size: u32, technology: DisplayTechnology) -> f64 {
    let base = 0.01 * f64::from(size).powf(1.5);
    let tech_factor = match technology {
        DisplayTechnology::Oled | DisplayTechnology::Led => 0.8,
        DisplayTechnology::Lcd | DisplayTechnology::Qled => 1.0,
        DisplayTechnology::Plasma | DisplayTechnology::MicroLed => 1.2,
        DisplayTechnology::MiniLed => 1.0,
    };
    let weight = base * tech_factor * rng.random_range(0.9..1.1);
    (weight * 10.0).round() / 10.0
}

/// 16:9 cabinet dimensions from the diagonal, each axis with its own small
/// noise. Width and height are whole centimeters, depth keeps one decimal.
fn dimensions_cm(rng: &mut impl Rng, size: u32) -> String {
    let diagonal = f64::from(size) * 2.54;
    let width = diagonal * 0.87 * rng.random_range(0.98..1.02);
    let height = diagonal * 0.49 * rng.random_range(0.98..1.02);
    let depth = (5.0 + f64::from(size) / 50.0) * rng.random_range(0.95..1.05);
    format!(
        "{}W x {}H x {:.1}D",
        width.round() as u32,
        height.round() as u32,
        depth
    )
}

fn power_consumption_watts(rng: &mut impl Rng, size: u32, technology: DisplayTechnology) -> u32 {
    let tech_factor = match technology {
        DisplayTechnology::Oled => 0.9,
        DisplayTechnology::Led => 1.0,
        DisplayTechnology::Lcd => 1.1,
        DisplayTechnology::Qled | DisplayTechnology::MiniLed => 1.2,
        DisplayTechnology::Plasma => 1.5,
        DisplayTechnology::MicroLed => 1.0,
    };
    let consumption = f64::from(size) * 1.5 * tech_factor * rng.random_range(0.9..1.1);
    consumption.round() as u32
}

/// Input lag falls with refresh rate and is floored at 1 ms.
fn input_lag_ms(rng: &mut impl Rng, refresh_rate: u32, technology: DisplayTechnology) -> u32 {
    let base = 40.0 - f64::from(refresh_rate) / 8.0;
    let tech_factor = match technology {
        DisplayTechnology::Oled => 0.8,
        DisplayTechnology::Qled | DisplayTechnology::MiniLed => 0.9,
        DisplayTechnology::Led => 1.0,
        DisplayTechnology::Lcd => 1.2,
        DisplayTechnology::Plasma => 1.3,
        DisplayTechnology::MicroLed => 1.0,
    };
    let lag = base * tech_factor * rng.random_range(0.85..1.15);
    lag.round().max(1.0) as u32
}

/// Per-certification Bernoulli. Established brands and expensive sets carry
/// more certifications; the bonus brand set is wider than the premium price
/// tier (it includes Panasonic and Philips).
fn eco_certifications(rng: &mut impl Rng, brand: Brand, price: f64) -> String {
    let established = matches!(
        brand,
        Brand::Samsung | Brand::LG | Brand::Sony | Brand::Panasonic | Brand::Philips
    );
    let probability = 0.3 + if established { 0.3 } else { 0.0 } + (price / 5000.0).min(0.3);

    let mut certifications = Vec::new();
    for certification in registry::ECO_CERTIFICATIONS {
        if rng.random_bool(probability) {
            certifications.push(certification);
        }
    }
    join_multi(&certifications)
}

/// Stock follows a truncated Normal(50, 30).
fn stock_quantity(rng: &mut impl Rng) -> u32 {
    Normal::new(50.0f64, 30.0f64)
        .map(|normal| normal.sample(rng).round().max(0.0) as u32)
        .unwrap_or(0)
}

/// Release dates fall uniformly in the first half of the manufacture year.
fn release_date(rng: &mut impl Rng, year: i32) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(year, 6, 30).unwrap_or_default();
    let span = (end - start).num_days().max(0);
    start + chrono::Duration::days(rng.random_range(0..=span))
}
