//! Error types for service-reminder

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Input rejected before any computation takes place
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid odometer reading '{0}' (expected a non-negative whole number)")]
    InvalidOdometer(String),

    #[error("Malformed record data: {0}")]
    MalformedData(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("No vehicle records to export")]
    NothingToExport,

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
