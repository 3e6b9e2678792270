// src/keys/digest.rs
//! Account key identities.
//!
//! The identity of a public key is the SHA-256 digest of its DER
//! SubjectPublicKeyInfo, in standard (padded) base64. Account storage indexes
//! on this string, and request verification compares it against the key that
//! signed the request.

use crate::error::KeyError;
use crate::keys::material::KeyMaterial;
use crate::utils::crypto::{constant_time_eq, hash_data};

/// Computes the base64 SHA-256 digest of a public key.
///
/// # Arguments
/// * `key` - A JWK by value or reference, the key inside it, or a bare key
///
/// # Returns
/// - `Ok(String)`: 44-character standard base64 digest
/// - `Err(KeyError::UnknownKeyType)` if the key type is not supported
pub fn key_digest<K: KeyMaterial>(key: K) -> Result<String, KeyError> {
    let der = key.canonical_key()?.to_spki_der()?;
    Ok(base64::encode(hash_data(&der)))
}

/// Tells whether two keys have the same identity.
///
/// Never fails: if either digest cannot be computed the keys are reported
/// as different, including when both sides are unsupported.
pub fn key_digest_equals<A: KeyMaterial, B: KeyMaterial>(a: A, b: B) -> bool {
    match (key_digest(a), key_digest(b)) {
        (Ok(left), Ok(right)) => constant_time_eq(left.as_bytes(), right.as_bytes()),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("key digest comparison failed: {}", e);
            false
        }
    }
}
