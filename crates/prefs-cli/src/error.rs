use std::io;

use prefs_core::FormError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] prefs_core::Error),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    #[error("Preferences were not saved: {0}")]
    NotSaved(String),
    #[error("Could not resolve a data directory; pass --store-path or set PREFS_STORE_PATH")]
    NoDataDir,
}
