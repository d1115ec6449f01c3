//! Error types shared by the Psyche crates

use thiserror::Error;

/// Error thrown when a configuration value is outside its allowed range
#[derive(Debug, Error)]
#[error("Invalid configuration value for '{field}': {reason}")]
pub struct InvalidConfigError {
    pub field: String,
    pub reason: String,
}

/// General shared error type
#[derive(Debug, Error)]
pub enum SharedError {
    #[error(transparent)]
    InvalidConfig(#[from] InvalidConfigError),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SharedError>;
