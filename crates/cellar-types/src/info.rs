use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only metadata for a stored key, as returned by `stat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// The caller-visible key, as passed to `stat`.
    pub key: String,
    /// Size of the stored object in bytes.
    pub size: u64,
    /// When the object was last written.
    pub modified: DateTime<Utc>,
    /// Whether the key names a leaf. Always `true` for this backend: the
    /// store models only leaf objects, never directories.
    pub is_terminal: bool,
}

impl KeyInfo {
    /// Metadata for a leaf object.
    pub fn leaf(key: impl Into<String>, size: u64, modified: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            size,
            modified,
            is_terminal: true,
        }
    }
}
