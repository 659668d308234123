use crate::error::CryptoError;

/// Byte transform applied to payloads before write and after read.
///
/// Implementations must be inverses over arbitrary byte sequences:
/// `decode(encode(p)) == p`. A codec performs no I/O; the only side
/// effect permitted is randomness consumption for nonces.
pub trait PayloadCodec: Send + Sync {
    /// Transform plaintext into the bytes to be stored.
    fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Transform stored bytes back into plaintext.
    fn decode(&self, stored: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// Identity codec: stored bytes equal caller-supplied bytes exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct CleartextCodec;

impl PayloadCodec for CleartextCodec {
    fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(plaintext.to_vec())
    }

    fn decode(&self, stored: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(stored.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleartext_is_identity_both_ways() {
        let codec = CleartextCodec;
        let payload = b"-----BEGIN CERTIFICATE-----\nMIIB...";
        assert_eq!(codec.encode(payload).unwrap(), payload);
        assert_eq!(codec.decode(payload).unwrap(), payload);
    }

    #[test]
    fn cleartext_handles_empty_payload() {
        let codec = CleartextCodec;
        assert_eq!(codec.encode(b"").unwrap(), Vec::<u8>::new());
        assert_eq!(codec.decode(b"").unwrap(), Vec::<u8>::new());
    }
}
