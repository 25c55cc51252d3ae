//! Error types for moto-core

use thiserror::Error;

/// Result type alias using moto-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in moto-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// HTTP transport failure (no connectivity, timeout, bad URL)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the catalogue API
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
