//! Errors from provisioning and bulk loading.

use taxa_store::StoreError;
use thiserror::Error;

/// Errors from provisioning and bulk loading.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The table definition cannot back the category store.
    #[error("invalid table definition: {0}")]
    InvalidDefinition(String),

    /// A sample-data file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sample-data file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing store failed during a write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for seed operations.
pub type SeedResult<T> = Result<T, SeedError>;
