//! Core contracts and helpers for tvforge.
//!
//! This crate defines the product record model, the option registry shared by
//! the generator and the report tooling, and the validation helpers that
//! enforce the dataset invariants.

pub mod error;
pub mod record;
pub mod registry;
pub mod validation;

pub use error::{Error, Result};
pub use record::{Dataset, TvRecord, join_multi, split_multi};
pub use registry::{Brand, BrandTier, COLUMNS, DisplayTechnology, Resolution, SmartPlatform};
pub use validation::{validate_dataset, validate_record};

/// Current contract version for exported dataset artifacts.
pub const DATASET_VERSION: &str = "0.1";
