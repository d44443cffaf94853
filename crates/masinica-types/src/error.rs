//! Error types for masinica

use thiserror::Error;

/// Rejected user input. Raised before any mutation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("License plate must not be empty")]
    EmptyPlate,

    #[error("Vehicle \"{0}\" already exists")]
    DuplicatePlate(String),

    #[error("Event type must be selected")]
    MissingLabel,

    #[error("Unknown event type \"{0}\" (expected RCA, CASCO, ITP or ROVINIETA)")]
    UnknownLabel(String),

    #[error("Event \"{label}\" already exists for \"{vehicle}\"")]
    DuplicateEvent { vehicle: String, label: String },

    #[error("Expiration date must be selected")]
    MissingExpirationDate,

    #[error("Invalid date \"{0}\" (expected YYYY-MM-DD or DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Invalid route \"{0}\"")]
    InvalidRoute(String),
}

/// The addressed vehicle or event no longer exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("Vehicle \"{0}\" not found")]
    Vehicle(String),

    #[error("Event \"{label}\" not found for \"{vehicle}\"")]
    Event { vehicle: String, label: String },
}

/// Storage-layer failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage IO error: {0}")]
    Io(String),

    #[error("Stored data corrupted: {0}")]
    Corrupted(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),
}

impl Error {
    /// True for recoverable input errors shown next to the offending field
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True when the caller should navigate back to a parent screen
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
