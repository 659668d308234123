//! Storage key validation.
//!
//! Keys are opaque, caller-chosen identifiers (certificate paths, account
//! paths). The only hard rule is that a key must be non-empty. A key that
//! ends in the lock suffix is still accepted, but it collides with the
//! companion object a lease for the unsuffixed key would use, so callers
//! that mint their own keys should avoid the suffix.

use crate::error::TypeError;

/// Suffix appended to an object name to form its lock companion object.
pub const LOCK_SUFFIX: &str = ".lock";

/// Validate a storage key, returning `Ok(())` if usable.
///
/// # Examples
///
/// ```
/// use cellar_types::validate_key;
///
/// assert!(validate_key("certificates/example.org/example.org.crt").is_ok());
/// assert!(validate_key("").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<(), TypeError> {
    if key.is_empty() {
        return Err(TypeError::EmptyKey);
    }
    Ok(())
}

/// Returns `true` if `key` ends in [`LOCK_SUFFIX`] and is therefore
/// ambiguous with the lock companion object of another key.
pub fn is_lock_ambiguous(key: &str) -> bool {
    key.ends_with(LOCK_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_keys() {
        assert!(validate_key("acme-v02.api.letsencrypt.org-directory").is_ok());
        assert!(validate_key("certificates/example.org/example.org.key").is_ok());
        assert!(validate_key("/leading-slash").is_ok());
    }

    #[test]
    fn rejects_empty_key() {
        assert_eq!(validate_key(""), Err(TypeError::EmptyKey));
    }

    #[test]
    fn lock_suffix_is_flagged_not_rejected() {
        assert!(validate_key("some/key.lock").is_ok());
        assert!(is_lock_ambiguous("some/key.lock"));
        assert!(!is_lock_ambiguous("some/key"));
        assert!(!is_lock_ambiguous("some/key.lockfile"));
    }
}
