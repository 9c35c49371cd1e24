use thiserror::Error;

/// Core error type shared across tvforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A record violates a declared field invariant.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// A dataset-level invariant does not hold.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

/// Convenience alias for results returned by tvforge crates.
pub type Result<T> = std::result::Result<T, Error>;
