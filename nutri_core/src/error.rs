//! Error types for the nutri_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for nutri_core operations
///
/// The calculation engine itself never fails; these errors come from the
/// layers around it (profile files, configuration, goal export).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile file could not be interpreted
    #[error("Profile error: {0}")]
    Profile(String),

    /// Required profile fields are absent, so no goals can be computed
    #[error("Insufficient profile data: missing {}", .0.join(", "))]
    InsufficientProfile(Vec<&'static str>),
}
