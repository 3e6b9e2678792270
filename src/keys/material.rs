// src/keys/material.rs
//! Resolution of the different key representations to one canonical key.
//!
//! Callers hold account keys in several shapes: a [`JsonWebKey`] owned or
//! borrowed from a request, the [`PublicKey`] inside it, or a bare
//! `rsa`/`k256` key. Every identity operation starts by resolving its input
//! through [`KeyMaterial::canonical_key`] exactly once.

use rsa::pkcs8::EncodePublicKey as _;
use rsa::RsaPublicKey;

use crate::error::KeyError;
use crate::models::jwk::{JsonWebKey, PublicKey};

/// A supported public key, borrowed from whatever representation held it.
#[derive(Debug, Clone, Copy)]
pub enum CanonicalKey<'a> {
    Rsa(&'a RsaPublicKey),
    Secp256k1(&'a k256::PublicKey),
}

impl CanonicalKey<'_> {
    /// DER encoding of the key's SubjectPublicKeyInfo.
    ///
    /// This is the same byte string X.509 certificates and CSRs embed, so
    /// two keys with equal parameters always produce equal bytes.
    pub fn to_spki_der(&self) -> Result<Vec<u8>, KeyError> {
        let doc = match self {
            CanonicalKey::Rsa(key) => key.to_public_key_der(),
            CanonicalKey::Secp256k1(key) => {
                k256::pkcs8::EncodePublicKey::to_public_key_der(*key)
            }
        }
        .map_err(|e| KeyError::Encoding(e.to_string()))?;
        Ok(doc.as_bytes().to_vec())
    }
}

/// Anything that can be resolved to a supported public key.
pub trait KeyMaterial {
    /// Unwraps this representation down to the key it carries.
    ///
    /// # Errors
    /// [`KeyError::UnknownKeyType`] when the representation holds a key
    /// type this crate does not support.
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError>;
}

impl KeyMaterial for PublicKey {
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError> {
        match self {
            PublicKey::Rsa(key) => Ok(CanonicalKey::Rsa(key)),
            PublicKey::Secp256k1(key) => Ok(CanonicalKey::Secp256k1(key)),
            PublicKey::Unsupported { kty, members } => {
                let kind = match members.get("crv").and_then(|v| v.as_str()) {
                    Some(crv) => format!("{}/{}", kty, crv),
                    None => kty.clone(),
                };
                Err(KeyError::UnknownKeyType(kind))
            }
        }
    }
}

impl KeyMaterial for JsonWebKey {
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError> {
        self.key.canonical_key()
    }
}

impl KeyMaterial for RsaPublicKey {
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError> {
        Ok(CanonicalKey::Rsa(self))
    }
}

impl KeyMaterial for k256::PublicKey {
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError> {
        Ok(CanonicalKey::Secp256k1(self))
    }
}

impl<T: KeyMaterial + ?Sized> KeyMaterial for &T {
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError> {
        (**self).canonical_key()
    }
}

impl<T: KeyMaterial + ?Sized> KeyMaterial for Box<T> {
    fn canonical_key(&self) -> Result<CanonicalKey<'_>, KeyError> {
        (**self).canonical_key()
    }
}
