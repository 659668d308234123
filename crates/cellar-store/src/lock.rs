use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use cellar_types::LockStamp;

use crate::error::{Result, StoreError};
use crate::naming::ObjectNaming;
use crate::traits::{ClientError, ObjectClient};

/// Tunables for lease acquisition.
#[derive(Clone, Debug)]
pub struct LockConfig {
    /// Age at which a lock record counts as stale and reclaimable.
    pub lease_timeout: Duration,
    /// Delay between attempts while the lock is contended.
    pub poll_interval: Duration,
    /// Overall budget for one acquisition call.
    pub acquire_timeout: Duration,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            lease_timeout: Duration::from_secs(120),
            poll_interval: Duration::from_secs(1),
            acquire_timeout: Duration::from_secs(15),
        }
    }
}

/// Externally observable state of one lock object.
#[derive(Clone, Debug)]
enum LockState {
    /// No lock object exists.
    Unlocked,
    /// Record present and younger than the lease timeout.
    Held(LockStamp),
    /// Record present but at or past the lease timeout.
    Stale(LockStamp),
    /// Record present but not a parseable timestamp.
    Unreadable,
}

/// Advisory, lease-based mutual exclusion over object-store primitives.
///
/// A lock is an object holding an RFC 3339 timestamp; all state lives in
/// the store. The record counts as held while younger than the lease
/// timeout and becomes reclaimable by any caller once older.
///
/// The store has no conditional write, so acquisition is a best-effort
/// claim: between observing an absent or stale record and writing a fresh
/// one, another caller can do the same and both writes will land,
/// last-write-wins. A store with write-if-absent semantics would close
/// that window; this one cannot, and participants must all honor the
/// same protocol.
pub struct LeaseLock {
    client: Arc<dyn ObjectClient>,
    naming: ObjectNaming,
    config: LockConfig,
    cancel: CancellationToken,
}

impl LeaseLock {
    pub fn new(
        client: Arc<dyn ObjectClient>,
        naming: ObjectNaming,
        config: LockConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            naming,
            config,
            cancel,
        }
    }

    /// Acquire the lease for `key`.
    ///
    /// Fails fast with [`StoreError::LockHeld`] when a fresh lease is
    /// already recorded. Otherwise claims the lock, retrying on write
    /// failure for up to the acquisition timeout with one poll interval
    /// between attempts; a stale or unreadable record found during the
    /// retry loop is overwritten. The wait is aborted promptly when the
    /// cancellation signal fires.
    pub async fn acquire(&self, key: &str) -> Result<()> {
        let name = self.naming.lock_object_name(key);
        debug!(lock = %name, "acquiring lease");
        let started = Instant::now();

        if let LockState::Held(stamp) = self.observe(&name).await? {
            debug!(lock = %name, stamp = %stamp, "lease already held");
            return Err(StoreError::LockHeld(key.to_string()));
        }

        loop {
            let claim_err = match self.claim(&name).await {
                Ok(()) => return Ok(()),
                Err(err) => err,
            };

            match self.observe(&name).await? {
                // Someone else holds a fresh lease; wait out a poll
                // interval below and try again.
                LockState::Held(_) => {}
                // The record is gone, expired, or garbage: force a fresh
                // claim and surface its result directly.
                LockState::Unlocked | LockState::Stale(_) | LockState::Unreadable => {
                    warn!(lock = %name, "forcing claim over stale or unreadable record");
                    return self.claim(&name).await;
                }
            }

            if started.elapsed() >= self.config.acquire_timeout {
                debug!(lock = %name, error = %claim_err, "giving up on lease");
                return Err(StoreError::LockTimeout {
                    key: key.to_string(),
                    waited: started.elapsed(),
                });
            }

            tokio::select! {
                _ = self.cancel.cancelled() => return Err(StoreError::Cancelled),
                _ = sleep(self.config.poll_interval) => {}
            }
        }
    }

    /// Release the lease for `key`.
    ///
    /// Refuses to delete anything that is not a parseable lock record,
    /// so a corrupted or unrelated object is never destroyed by an
    /// unlock.
    pub async fn release(&self, key: &str) -> Result<()> {
        let name = self.naming.lock_object_name(key);
        debug!(lock = %name, "releasing lease");

        match self.observe(&name).await? {
            LockState::Unlocked => Err(StoreError::LockNotFound(key.to_string())),
            LockState::Unreadable => Err(StoreError::InvalidLockContent(key.to_string())),
            LockState::Held(_) | LockState::Stale(_) => self
                .client
                .delete(&name)
                .await
                .map_err(StoreError::from_client),
        }
    }

    /// Whether a fresh lease currently exists for `key`.
    pub async fn is_locked(&self, key: &str) -> Result<bool> {
        let name = self.naming.lock_object_name(key);
        Ok(matches!(self.observe(&name).await?, LockState::Held(_)))
    }

    /// Read and classify the lock object. Not-found means unlocked; any
    /// other client failure propagates.
    async fn observe(&self, name: &str) -> Result<LockState> {
        let raw = match self.client.get(name).await {
            Ok(raw) => raw,
            Err(ClientError::NotFound(_)) => return Ok(LockState::Unlocked),
            Err(err) => return Err(StoreError::from_client(err)),
        };

        match LockStamp::parse(&String::from_utf8_lossy(&raw)) {
            Ok(stamp) if stamp.is_stale(self.config.lease_timeout) => Ok(LockState::Stale(stamp)),
            Ok(stamp) => Ok(LockState::Held(stamp)),
            Err(_) => Ok(LockState::Unreadable),
        }
    }

    /// Write a fresh timestamp record. Best-effort: the store cannot
    /// refuse the write because another record already exists.
    async fn claim(&self, name: &str) -> Result<()> {
        let stamp = LockStamp::now();
        self.client
            .put(name, stamp.to_wire().into_bytes())
            .await
            .map_err(StoreError::from_client)?;
        debug!(lock = %name, stamp = %stamp, "lease claimed");
        Ok(())
    }
}
