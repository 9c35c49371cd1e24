use thiserror::Error;

/// Errors emitted by the dataset generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A derived record violated a dataset invariant.
    #[error(transparent)]
    Invariant(#[from] tvforge_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted by the export layer.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported output format '{requested}' (supported: {supported})")]
    UnsupportedFormat {
        requested: String,
        supported: &'static str,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
