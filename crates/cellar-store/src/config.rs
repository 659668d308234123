use serde::{Deserialize, Serialize};

/// Fallback object-name prefix when none is configured.
pub const DEFAULT_PREFIX: &str = "acme";

/// Connection and layout configuration for the storage backend.
///
/// The client credentials (`host`, `bucket`, `access_key`, `secret_key`)
/// are consumed by whichever [`ObjectClient`](crate::ObjectClient)
/// implementation the caller constructs; the backend itself only reads
/// `prefix` and `encryption_key`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Object-store endpoint host.
    pub host: String,
    /// Bucket holding all certificate material.
    pub bucket: String,
    /// Access credential for the bucket.
    pub access_key: String,
    /// Secret credential for the bucket.
    pub secret_key: String,
    /// Object-name prefix under which every key lives. A blank prefix
    /// resolves to [`DEFAULT_PREFIX`].
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Optional secret enabling encryption at rest. Must be exactly 32
    /// bytes when set; leave unset (or empty) to store certificate
    /// material in clear text.
    #[serde(default)]
    pub encryption_key: Option<String>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl StoreConfig {
    /// The effective prefix: the configured one, or the default if blank.
    pub fn effective_prefix(&self) -> &str {
        if self.prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            &self.prefix
        }
    }
}
