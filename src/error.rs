//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the library layers (search, config, rendering).
///
/// The recommendation pipeline itself never surfaces these: it degrades
/// missing or malformed input to defaults and logs the recovery.
#[derive(Debug, Error)]
pub enum UiProError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {}", path.display())]
    DataFileMissing { path: PathBuf },

    #[error("Unknown search domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown stack: {0}")]
    UnknownStack(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UiProError>;
