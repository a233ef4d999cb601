use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for domain, storage, and service layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("invalid amount {0}: amount must be greater than zero")]
    InvalidAmount(f64),
    #[error("invalid date `{0}`: date must be YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("failed to read expense store: {0}")]
    StorageRead(String),
    #[error("failed to write expense store: {0}")]
    StorageWrite(String),
}

pub type Result<T> = StdResult<T, TrackerError>;
