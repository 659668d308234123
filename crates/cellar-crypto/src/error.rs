use thiserror::Error;

/// Errors from payload codec operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The configured secret has the wrong length. Fatal at setup; no
    /// operation ever starts with a malformed key.
    #[error("encryption key must be exactly {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The stored payload is too short to even carry a nonce.
    #[error("stored payload truncated: {actual} bytes, need at least {needed}")]
    Truncated { needed: usize, actual: usize },

    /// Authenticated decryption failed: the ciphertext was modified or
    /// the key does not match.
    #[error("authenticated decryption failed")]
    DecryptFailed,

    /// The cipher rejected the encryption request.
    #[error("encryption failed")]
    EncryptFailed,
}
