//! Error types for the growth projection crate

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, GrowthError>;

/// Failures that can leave the library as hard errors
///
/// Malformed or missing numeric input is not an error: the normalizer turns
/// it into an absent value and the readiness gate reports it.
#[derive(Error, Debug)]
pub enum GrowthError {
    /// Compounding frequency outside the closed set of four values
    #[error("unknown compound frequency: {0:?} (expected daily, monthly, quarterly or annually)")]
    UnknownFrequency(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
