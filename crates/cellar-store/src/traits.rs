use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Metadata for a stored object, as reported by `stat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectMeta {
    /// Object size in bytes.
    pub size: u64,
    /// When the object was last written.
    pub modified: DateTime<Utc>,
}

/// Errors surfaced by an [`ObjectClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The named object does not exist. This is the one signal the
    /// façade translates into its own not-exist kind; everything else
    /// passes through as a transport failure.
    #[error("no such object: {0}")]
    NotFound(String),

    /// Any other failure: network, permission, service error.
    #[error("object store request failed: {0}")]
    Transport(String),
}

/// Client for one bucket of a remote object store.
///
/// This is the seam where a real S3-style network client plugs in: just
/// put/get/delete/stat/list over named binary blobs. There is no locking,
/// no conditional write, and no versioning; concurrent writes to the same
/// name are last-write-wins. Implementations must be safe to share across
/// tasks.
#[async_trait]
pub trait ObjectClient: Send + Sync {
    /// Write an object, overwriting any existing object of that name.
    async fn put(&self, name: &str, payload: Vec<u8>) -> Result<(), ClientError>;

    /// Read an object's full contents.
    async fn get(&self, name: &str) -> Result<Vec<u8>, ClientError>;

    /// Remove an object.
    async fn delete(&self, name: &str) -> Result<(), ClientError>;

    /// Size and modification time of an object.
    async fn stat(&self, name: &str) -> Result<ObjectMeta, ClientError>;

    /// Names of all objects starting with `prefix`, sorted. When
    /// `recursive` is false, names nested under a further `/` are
    /// omitted.
    async fn list(&self, prefix: &str, recursive: bool) -> Result<Vec<String>, ClientError>;
}
