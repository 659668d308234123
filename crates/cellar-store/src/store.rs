use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use cellar_crypto::{CleartextCodec, PayloadCodec, SealedCodec};
use cellar_types::{validate_key, KeyInfo};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::lock::{LeaseLock, LockConfig};
use crate::naming::ObjectNaming;
use crate::traits::ObjectClient;

/// Key/value storage backend for certificate material.
///
/// Composes object naming, the payload codec, and an [`ObjectClient`]
/// into one storage contract: store/load/delete/exists/list/stat plus
/// the advisory lease lock. Payload writes are last-write-wins in the
/// remote store; the façade adds no client-side synchronization and
/// holds no state beyond its configuration.
pub struct Cellar {
    client: Arc<dyn ObjectClient>,
    naming: ObjectNaming,
    codec: Box<dyn PayloadCodec>,
    lease: LeaseLock,
}

impl Cellar {
    /// Build a backend from its configuration and a connected client.
    ///
    /// The payload codec is selected once, here: no `encryption_key`
    /// means clear-text storage; a key of exactly 32 bytes enables
    /// encryption at rest; any other length is a fatal configuration
    /// error and the backend is never constructed.
    pub fn new(config: StoreConfig, client: Arc<dyn ObjectClient>) -> Result<Self> {
        Self::with_options(config, client, LockConfig::default(), CancellationToken::new())
    }

    /// Like [`Cellar::new`], with explicit lock tunables and an external
    /// cancellation signal for lease waits.
    pub fn with_options(
        config: StoreConfig,
        client: Arc<dyn ObjectClient>,
        lock_config: LockConfig,
        cancel: CancellationToken,
    ) -> Result<Self> {
        let codec: Box<dyn PayloadCodec> = match config.encryption_key.as_deref() {
            None | Some("") => {
                info!("clear text certificate storage active");
                Box::new(CleartextCodec)
            }
            Some(secret) => {
                let sealed = SealedCodec::new(secret.as_bytes())
                    .map_err(|e| StoreError::Config(e.to_string()))?;
                info!("encrypted certificate storage active");
                Box::new(sealed)
            }
        };

        let naming = ObjectNaming::new(config.effective_prefix());
        let lease = LeaseLock::new(Arc::clone(&client), naming.clone(), lock_config, cancel);

        Ok(Self {
            client,
            naming,
            codec,
            lease,
        })
    }

    /// Write `value` under `key`, overwriting any existing object.
    pub async fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let name = self.naming.object_name(key);
        debug!(object = %name, bytes = value.len(), "store");
        let payload = self.codec.encode(value)?;
        self.client
            .put(&name, payload)
            .await
            .map_err(StoreError::from_client)
    }

    /// Read and decode the object stored under `key`.
    ///
    /// An absent object surfaces as [`StoreError::NotExist`]; a payload
    /// that fails authentication or decoding as [`StoreError::Decode`].
    pub async fn load(&self, key: &str) -> Result<Vec<u8>> {
        validate_key(key)?;
        let name = self.naming.object_name(key);
        debug!(object = %name, "load");
        let stored = self
            .client
            .get(&name)
            .await
            .map_err(StoreError::from_client)?;
        Ok(self.codec.decode(&stored)?)
    }

    /// Remove the object stored under `key`.
    pub async fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let name = self.naming.object_name(key);
        debug!(object = %name, "delete");
        self.client
            .delete(&name)
            .await
            .map_err(StoreError::from_client)
    }

    /// Whether an object exists under `key`. Never fails: any error,
    /// including not-found, reads as absent.
    pub async fn exists(&self, key: &str) -> bool {
        if validate_key(key).is_err() {
            return false;
        }
        let name = self.naming.object_name(key);
        debug!(object = %name, "exists");
        self.client.stat(&name).await.is_ok()
    }

    /// List every stored object under the configured prefix.
    ///
    /// The `prefix` and `recursive` arguments are part of the storage
    /// contract, but the resolved listing always scopes to the
    /// configured root prefix, recursively. Returned names are the
    /// resolved object names.
    pub async fn list(&self, _prefix: &str, _recursive: bool) -> Result<Vec<String>> {
        let root = self.naming.root();
        debug!(prefix = %root, "list");
        self.client
            .list(&root, true)
            .await
            .map_err(StoreError::from_client)
    }

    /// Metadata for the object stored under `key`.
    pub async fn stat(&self, key: &str) -> Result<KeyInfo> {
        validate_key(key)?;
        let name = self.naming.object_name(key);
        debug!(object = %name, "stat");
        let meta = self
            .client
            .stat(&name)
            .await
            .map_err(StoreError::from_client)?;
        Ok(KeyInfo::leaf(key, meta.size, meta.modified))
    }

    /// Acquire the advisory lease for `key`. See [`LeaseLock::acquire`].
    pub async fn lock(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.lease.acquire(key).await
    }

    /// Release the advisory lease for `key`. See [`LeaseLock::release`].
    pub async fn unlock(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.lease.release(key).await
    }

    /// Whether a fresh lease currently exists for `key`.
    pub async fn is_locked(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        self.lease.is_locked(key).await
    }
}

impl fmt::Debug for Cellar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cellar")
            .field("root", &self.naming.root())
            .finish_non_exhaustive()
    }
}
