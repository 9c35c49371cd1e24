//! Option registry: the closed pools of legal categorical values and the
//! canonical output column order.
//!
//! Driver attributes that derivation rules branch on are enums, so a factor
//! table that misses a value fails to compile instead of falling through at
//! runtime. Everything else is a plain slice. Serialized forms (including the
//! Spanish country, color, and segment labels) are kept exactly as downstream
//! chart consumers expect them.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Television brand pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Samsung,
    LG,
    Sony,
    Panasonic,
    Philips,
    TCL,
    Hisense,
    Sharp,
    Vizio,
    Toshiba,
    JVC,
    Xiaomi,
    OnePlus,
    Realme,
}

/// Pricing/quality tier of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandTier {
    Premium,
    Mid,
    Value,
}

impl Brand {
    pub const ALL: [Brand; 14] = [
        Brand::Samsung,
        Brand::LG,
        Brand::Sony,
        Brand::Panasonic,
        Brand::Philips,
        Brand::TCL,
        Brand::Hisense,
        Brand::Sharp,
        Brand::Vizio,
        Brand::Toshiba,
        Brand::JVC,
        Brand::Xiaomi,
        Brand::OnePlus,
        Brand::Realme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Samsung => "Samsung",
            Brand::LG => "LG",
            Brand::Sony => "Sony",
            Brand::Panasonic => "Panasonic",
            Brand::Philips => "Philips",
            Brand::TCL => "TCL",
            Brand::Hisense => "Hisense",
            Brand::Sharp => "Sharp",
            Brand::Vizio => "Vizio",
            Brand::Toshiba => "Toshiba",
            Brand::JVC => "JVC",
            Brand::Xiaomi => "Xiaomi",
            Brand::OnePlus => "OnePlus",
            Brand::Realme => "Realme",
        }
    }

    pub fn tier(&self) -> BrandTier {
        match self {
            Brand::Samsung | Brand::LG | Brand::Sony => BrandTier::Premium,
            Brand::Panasonic | Brand::Philips | Brand::TCL => BrandTier::Mid,
            _ => BrandTier::Value,
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display panel technology pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayTechnology {
    #[serde(rename = "LED")]
    Led,
    #[serde(rename = "OLED")]
    Oled,
    #[serde(rename = "QLED")]
    Qled,
    #[serde(rename = "Mini-LED")]
    MiniLed,
    #[serde(rename = "LCD")]
    Lcd,
    Plasma,
    #[serde(rename = "MicroLED")]
    MicroLed,
}

impl DisplayTechnology {
    pub const ALL: [DisplayTechnology; 7] = [
        DisplayTechnology::Led,
        DisplayTechnology::Oled,
        DisplayTechnology::Qled,
        DisplayTechnology::MiniLed,
        DisplayTechnology::Lcd,
        DisplayTechnology::Plasma,
        DisplayTechnology::MicroLed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTechnology::Led => "LED",
            DisplayTechnology::Oled => "OLED",
            DisplayTechnology::Qled => "QLED",
            DisplayTechnology::MiniLed => "Mini-LED",
            DisplayTechnology::Lcd => "LCD",
            DisplayTechnology::Plasma => "Plasma",
            DisplayTechnology::MicroLed => "MicroLED",
        }
    }
}

impl fmt::Display for DisplayTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen resolution pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "Full HD")]
    FullHd,
    #[serde(rename = "4K UHD")]
    Uhd4k,
    #[serde(rename = "8K UHD")]
    Uhd8k,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Hd,
        Resolution::FullHd,
        Resolution::Uhd4k,
        Resolution::Uhd8k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Hd => "HD",
            Resolution::FullHd => "Full HD",
            Resolution::Uhd4k => "4K UHD",
            Resolution::Uhd8k => "8K UHD",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smart TV platform pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmartPlatform {
    #[serde(rename = "Android TV")]
    AndroidTv,
    #[serde(rename = "Google TV")]
    GoogleTv,
    #[serde(rename = "WebOS")]
    WebOs,
    Tizen,
    #[serde(rename = "Roku TV")]
    RokuTv,
    #[serde(rename = "Fire TV")]
    FireTv,
    Vidaa,
    SmartCast,
    #[serde(rename = "My Home Screen")]
    MyHomeScreen,
}

impl SmartPlatform {
    pub const ALL: [SmartPlatform; 9] = [
        SmartPlatform::AndroidTv,
        SmartPlatform::GoogleTv,
        SmartPlatform::WebOs,
        SmartPlatform::Tizen,
        SmartPlatform::RokuTv,
        SmartPlatform::FireTv,
        SmartPlatform::Vidaa,
        SmartPlatform::SmartCast,
        SmartPlatform::MyHomeScreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SmartPlatform::AndroidTv => "Android TV",
            SmartPlatform::GoogleTv => "Google TV",
            SmartPlatform::WebOs => "WebOS",
            SmartPlatform::Tizen => "Tizen",
            SmartPlatform::RokuTv => "Roku TV",
            SmartPlatform::FireTv => "Fire TV",
            SmartPlatform::Vidaa => "Vidaa",
            SmartPlatform::SmartCast => "SmartCast",
            SmartPlatform::MyHomeScreen => "My Home Screen",
        }
    }
}

impl fmt::Display for SmartPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen diagonal sizes in inches.
pub const SCREEN_SIZES_INCHES: [u32; 11] = [32, 40, 43, 50, 55, 58, 65, 70, 75, 85, 98];

/// Panel refresh rates in Hz.
pub const REFRESH_RATES_HZ: [u32; 6] = [60, 75, 90, 120, 144, 240];

/// HDR formats a set may support. The serialized field is a comma-joined
/// subset, or [`NONE_LITERAL`] when empty.
pub const HDR_FORMATS: [&str; 4] = ["HDR10", "HDR10+", "Dolby Vision", "HLG"];

/// HDMI port counts, ordered cheapest slice first.
pub const HDMI_PORT_COUNTS: [u8; 5] = [1, 2, 3, 4, 5];

/// USB port counts, ordered cheapest slice first.
pub const USB_PORT_COUNTS: [u8; 5] = [0, 1, 2, 3, 4];

/// Voice assistant pool, including the "no assistant" and multi-assistant markers.
pub const VOICE_ASSISTANTS: [&str; 6] = [
    "Alexa",
    "Google Assistant",
    "Bixby",
    "Siri",
    "None",
    "Multiple",
];

/// Broadcast tuner types.
pub const TUNER_TYPES: [&str; 5] = ["ATSC", "DVB-T2", "ISDB-T", "DTMB", "Hybrid"];

/// Countries of origin.
pub const COUNTRIES_OF_ORIGIN: [&str; 9] = [
    "China",
    "Corea del Sur",
    "Japón",
    "Estados Unidos",
    "Malasia",
    "México",
    "Taiwán",
    "Vietnam",
    "Tailandia",
];

/// Warehouse locations.
pub const WAREHOUSE_LOCATIONS: [&str; 15] = [
    "Los Angeles",
    "New York",
    "Chicago",
    "Houston",
    "Miami",
    "Seattle",
    "Dallas",
    "Atlanta",
    "Denver",
    "Boston",
    "Shanghái",
    "Shenzhen",
    "Tokio",
    "Seúl",
    "Ámsterdam",
];

/// Warranty lengths in years.
pub const WARRANTY_YEARS: [u8; 4] = [1, 2, 3, 5];

/// Chassis colors.
pub const COLORS: [&str; 6] = ["Negro", "Blanco", "Plateado", "Gris", "Azul", "Rojo"];

/// Eco-friendly certifications a set may carry. As with HDR formats, the
/// serialized field is a comma-joined subset or [`NONE_LITERAL`].
pub const ECO_CERTIFICATIONS: [&str; 6] = [
    "Energy Star",
    "EPEAT",
    "RoHS",
    "TCO Certified",
    "Eco-Flower",
    "Blue Angel",
];

/// Manufacture year range.
pub const MANUFACTURE_YEARS: RangeInclusive<i32> = 2018..=2025;

/// Energy efficiency ratings.
pub const ENERGY_RATINGS: [&str; 7] = ["A+++", "A++", "A+", "A", "B", "C", "D"];

/// Placeholder written for empty multi-value fields.
pub const NONE_LITERAL: &str = "None";

/// Canonical output column order. Every export serializes exactly these
/// columns, in this order, with these case-sensitive names.
pub const COLUMNS: [&str; 34] = [
    "PRODUCT_SKU",
    "BRAND",
    "MODEL",
    "DISPLAY_TECHNOLOGY",
    "SCREEN_SIZE_INCHES",
    "RESOLUTION",
    "PRICE_USD",
    "QUALITY_RATING",
    "REFRESH_RATE_HZ",
    "SMART_TV_PLATFORM",
    "HDR_FORMATS",
    "HDMI_PORTS",
    "USB_PORTS",
    "AUDIO_OUTPUT_WATTS",
    "HAS_WIFI",
    "HAS_BLUETOOTH",
    "VOICE_ASSISTANT",
    "TUNER_TYPE",
    "MANUFACTURE_YEAR",
    "ENERGY_RATING",
    "COUNTRY_OF_ORIGIN",
    "SUPPLIER_ID",
    "WAREHOUSE_LOCATION",
    "STOCK_QUANTITY",
    "CUSTOMER_RATING",
    "IS_CURVED",
    "WEIGHT_KG",
    "DIMENSIONS_CM",
    "WARRANTY_YEARS",
    "RELEASE_DATE",
    "COLOR",
    "ECO_CERTIFICATIONS",
    "POWER_CONSUMPTION_WATTS",
    "INPUT_LAG_MS",
];
