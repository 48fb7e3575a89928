//! Error types for tzmap services.

use thiserror::Error;

use crate::bounds::BoundsParseError;
use crate::time::InstantParseError;

/// Result type alias using TzMapError.
pub type TzMapResult<T> = Result<T, TzMapError>;

/// Primary error type for the fallible edges of tzmap: request parsing and
/// dataset loading. The coloring core itself never fails.
#[derive(Debug, Error)]
pub enum TzMapError {
    // === Request Errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid bbox: {0}")]
    InvalidBounds(#[from] BoundsParseError),

    #[error("Invalid time specification: {0}")]
    InvalidTime(#[from] InstantParseError),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    // === Data Errors ===
    #[error("Dataset not loaded")]
    DatasetUnavailable,

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl TzMapError {
    /// Stable machine-readable code for API error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            TzMapError::InvalidParameter { .. } => "InvalidParameterValue",
            TzMapError::InvalidBounds(_) => "InvalidBBox",
            TzMapError::InvalidTime(_) => "InvalidDateTime",
            TzMapError::UnknownTimezone(_) => "UnknownTimezone",
            TzMapError::DatasetUnavailable => "DatasetUnavailable",
            TzMapError::InvalidDataset(_) => "InvalidDataset",
            _ => "NoApplicableCode",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            TzMapError::InvalidParameter { .. }
            | TzMapError::InvalidBounds(_)
            | TzMapError::InvalidTime(_) => 400,

            TzMapError::UnknownTimezone(_) => 404,

            TzMapError::DatasetUnavailable => 503,

            _ => 500,
        }
    }
}

impl From<std::io::Error> for TzMapError {
    fn from(err: std::io::Error) -> Self {
        TzMapError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for TzMapError {
    fn from(err: serde_json::Error) -> Self {
        TzMapError::InvalidDataset(format!("JSON error: {}", err))
    }
}
