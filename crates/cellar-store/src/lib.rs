//! Object-store storage backend for TLS certificate material.
//!
//! Cellar persists certificates, private keys, and account data as named
//! binary objects in a remote, eventually-consistent object store, and
//! coordinates mutually-exclusive access across independent processes
//! that may race to issue or renew certificates for the same name.
//!
//! The store itself offers only put/get/delete/stat/list; it has no
//! locking and no compare-and-swap. Two pieces are layered on top:
//!
//! - an advisory, lease-based lock recorded as a timestamp object
//!   ([`LeaseLock`]), and
//! - an at-rest payload codec (cleartext or authenticated encryption,
//!   from `cellar-crypto`) applied transparently to every read and write.
//!
//! # Components
//!
//! - [`ObjectClient`] — the collaborator seam where a real S3-style
//!   network client plugs in
//! - [`InMemoryObjectClient`] — `HashMap`-based client for tests and
//!   embedding
//! - [`ObjectNaming`] — logical key to object path mapping
//! - [`LeaseLock`] — the lock coordinator
//! - [`Cellar`] — the key/value façade exposing the full storage contract
//!
//! # Design Rules
//!
//! 1. All lock state lives in the store; the client keeps no shared
//!    memory between callers.
//! 2. Payload writes are last-write-wins; the façade adds no client-side
//!    synchronization.
//! 3. All I/O errors are propagated, never silently ignored. The one
//!    exception is `exists`, which reports any failure as absence.

pub mod config;
pub mod error;
pub mod lock;
pub mod memory;
pub mod naming;
pub mod store;
pub mod traits;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use lock::{LeaseLock, LockConfig};
pub use memory::InMemoryObjectClient;
pub use naming::ObjectNaming;
pub use store::Cellar;
pub use traits::{ClientError, ObjectClient, ObjectMeta};
