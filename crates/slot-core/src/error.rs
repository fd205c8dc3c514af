//! Error types for slot-core
//!
//! Gameplay never fails: invalid requests are ignored by policy. These errors
//! only come out of configuration loading and parsing.

use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
