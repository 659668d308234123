use std::time::Duration;

use cellar_crypto::CryptoError;
use cellar_types::TypeError;

use crate::traits::ClientError;

/// Errors from storage and locking operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object does not exist. Recoverable; callers probe
    /// for absent keys routinely.
    #[error("key does not exist: {0}")]
    NotExist(String),

    /// The key failed validation.
    #[error("invalid key: {0}")]
    InvalidKey(#[from] TypeError),

    /// A valid lease is currently held by another caller.
    #[error("lock already exists and is still valid: {0}")]
    LockHeld(String),

    /// The lease could not be acquired within the acquisition budget.
    #[error("timeout while acquiring lock for {key} after {waited:?}")]
    LockTimeout { key: String, waited: Duration },

    /// Unlock was asked to release a key that has no lock object.
    #[error("lock does not exist: {0}")]
    LockNotFound(String),

    /// A lock object exists but its content is not a parseable
    /// timestamp. The object is left in place, never repaired silently.
    #[error("invalid lock content: {0}")]
    InvalidLockContent(String),

    /// Setup-time misconfiguration; the backend was never constructed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Payload decode failed: corruption at rest or a wrong encryption
    /// key. Surfaced, not retried.
    #[error("payload decode failed: {0}")]
    Decode(#[from] CryptoError),

    /// Network or store failure, propagated unchanged.
    #[error("transport error: {0}")]
    Transport(String),

    /// A lease wait was aborted by the external cancellation signal.
    #[error("lock acquisition cancelled")]
    Cancelled,
}

impl StoreError {
    /// Translate a collaborator error: the not-found signal becomes
    /// [`StoreError::NotExist`], everything else a transport failure.
    pub(crate) fn from_client(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(name) => StoreError::NotExist(name),
            ClientError::Transport(message) => StoreError::Transport(message),
        }
    }
}

/// Result alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
