//! Errors from table storage operations.

/// Errors from table storage operations.
///
/// Provider messages are carried verbatim; upper layers surface them
/// unmodified rather than interpreting them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend is unreachable, throttled, or otherwise failing.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A pagination token does not match the read it was supplied to.
    #[error("invalid pagination token: {0}")]
    InvalidToken(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
