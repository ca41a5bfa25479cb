//! Errors in the library.
use thiserror::Error;

/// Errors raised by core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested key does not exist in a [`Record`](crate::record::Record).
    #[error("Record key not found: {0}")]
    RecordKey(String),

    /// The value stored under the key has a different type than requested.
    #[error("Record value type mismatch, expected {0}")]
    RecordValueType(String),
}
