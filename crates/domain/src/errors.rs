//! Error types used throughout the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ShiftLedger
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShiftLedgerError {
    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Invalid anomaly: {0}")]
    InvalidAnomaly(String),

    #[error("Unknown shift code: {0}")]
    UnknownShift(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ShiftLedger operations
pub type Result<T> = std::result::Result<T, ShiftLedgerError>;
