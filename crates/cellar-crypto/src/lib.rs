//! Payload transforms for certificate material at rest.
//!
//! A [`PayloadCodec`] converts plaintext bytes into the bytes written to
//! the object store and back. Two implementations exist, selected once at
//! backend setup:
//!
//! - [`CleartextCodec`] — identity transform; stored bytes equal caller
//!   bytes exactly.
//! - [`SealedCodec`] — XChaCha20-Poly1305 authenticated encryption with a
//!   fresh random nonce per write; stored bytes are `nonce || ciphertext`.
//!
//! Codecs never touch the network. All crypto operations wrap an
//! established AEAD library; there is no custom cryptography here.

pub mod codec;
pub mod error;
pub mod sealed;

pub use codec::{CleartextCodec, PayloadCodec};
pub use error::CryptoError;
pub use sealed::{SealedCodec, KEY_SIZE, NONCE_SIZE};
