//! Foundation types for Cellar, an object-store storage backend for TLS
//! certificate material.
//!
//! This crate provides the key, metadata, and lock-timestamp types shared
//! by the codec and storage crates.
//!
//! # Key Types
//!
//! - [`KeyInfo`] — read-only stat metadata for a stored key
//! - [`LockStamp`] — the RFC 3339 timestamp payload of a lock object
//! - [`validate_key`] — the single rule imposed on caller-chosen keys

pub mod error;
pub mod info;
pub mod key;
pub mod stamp;

pub use error::TypeError;
pub use info::KeyInfo;
pub use key::{is_lock_ambiguous, validate_key, LOCK_SUFFIX};
pub use stamp::LockStamp;
