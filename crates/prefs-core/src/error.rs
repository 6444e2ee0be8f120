//! Error types for prefs-core

use thiserror::Error;

use crate::validation::EmailError;

/// Result type alias using prefs-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prefs-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Email address failed format validation
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Persisting a snapshot failed
    #[error("Storage error: {0}")]
    Storage(String),
}
