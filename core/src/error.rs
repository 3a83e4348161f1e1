// core/src/error.rs
use thiserror::Error;

/// Feil ved import av kretsparametre (CSV / upload).
/// `cause` er menneskelesbar og vises direkte i dashbordet.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("CSV-import feilet: {cause}")]
pub struct ParseError {
    pub cause: String,
}

impl ParseError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self { cause: cause.into() }
    }
}

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("ukjent varmekrets {index} (har {len} kretser)")]
    CircuitIndex { index: usize, len: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("CSV-skriving feilet: {0}")]
    Csv(#[from] csv::Error),

    #[error("konfig-feil ved {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
