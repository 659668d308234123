use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("key must not be empty")]
    EmptyKey,

    #[error("not a valid RFC 3339 lock timestamp: {0:?}")]
    InvalidTimestamp(String),
}
