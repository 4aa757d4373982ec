//! Error types for forwards loading and configuration

use thiserror::Error;

/// Failures of the forwards event source.
///
/// Every variant is recoverable: callers report it and show no data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport failure talking to the node API
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Node API answered with a non-success status
    #[error("Forwards API error: {status}")]
    Status { status: u16 },

    /// Body was not a list of forwards
    #[error("Failed to decode forwards: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Forwards file not found: {path}")]
    NotFound { path: String },

    /// Time window must be at least one day
    #[error("Invalid time window: {days} days")]
    InvalidWindow { days: u32 },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Order key outside the sortable column set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown order key '{0}'")]
pub struct UnknownOrderKey(pub String);
