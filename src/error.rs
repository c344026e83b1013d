//! Error types for settings loading

use thiserror::Error;

/// Errors raised while loading or validating [`crate::Settings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
