//! Error types for gmaps-location

use thiserror::Error;

/// Main error type for gmaps-location operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request construction or transport failure talking to Google Maps
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream body was not the JSON shape we expect
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for gmaps-location operations
pub type Result<T> = std::result::Result<T, Error>;
