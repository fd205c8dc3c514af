//! Error types for slot-sim

use thiserror::Error;

use slot_core::SlotError;
use slot_stage::ParseTaxonomyError;

/// Simulator error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("Slot config error: {0}")]
    Slot(#[from] SlotError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseTaxonomyError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type SimResult<T> = Result<T, SimError>;
