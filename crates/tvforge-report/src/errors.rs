use thiserror::Error;

/// Errors emitted by the report and chart layer.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Charts need at least one record to size their axes.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),
    #[error("chart rendering failed: {0}")]
    Chart(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
