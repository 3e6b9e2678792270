// src/models/jwk.rs
//! JSON Web Key (RFC 7517) public key model.
//!
//! Defines the key structure that protocol messages carry for account keys,
//! with serde support for the JWK wire format.
//!
//! # Supported key types
//! - `RSA` (`n`, `e`)
//! - `EC` on `secp256k1` (`crv`, `x`, `y`)
//!
//! Any other `kty` or curve still parses, into [`PublicKey::Unsupported`],
//! so that a request carrying such a key can be rejected with a precise
//! error by the identity layer instead of failing at decode time.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::KeyError;
use crate::utils::encoding::{b64_decode, b64_encode};

/// Curve name for secp256k1 keys (RFC 8812).
pub const CURVE_SECP256K1: &str = "secp256k1";

const COORDINATE_LEN: usize = 32;

/// Largest RSA modulus accepted from a JWK, in bits.
///
/// `RsaPublicKey::new` stops at 4096 bits; account keys of 8192 bits exist in
/// the wild, so the ceiling is raised while still bounding the work a single
/// key can cause.
pub const MAX_RSA_MODULUS_BITS: usize = 16384;

/// The cryptographic key carried by a [`JsonWebKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
    Secp256k1(k256::PublicKey),
    /// A key type this crate does not handle. The original members are kept
    /// so the key re-serializes unchanged.
    Unsupported {
        kty: String,
        members: Map<String, Value>,
    },
}

impl PublicKey {
    /// The `kty` member this key serializes with.
    pub fn kty(&self) -> &str {
        match self {
            PublicKey::Rsa(_) => "RSA",
            PublicKey::Secp256k1(_) => "EC",
            PublicKey::Unsupported { kty, .. } => kty,
        }
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        PublicKey::Rsa(key)
    }
}

impl From<k256::PublicKey> for PublicKey {
    fn from(key: k256::PublicKey) -> Self {
        PublicKey::Secp256k1(key)
    }
}

/// A public JSON Web Key as found in ACME account objects and JWS headers.
///
/// # Fields
/// - `key`: The parsed key material
/// - `key_id`: Optional `kid` member
/// - `algorithm`: Optional `alg` member
///
/// The default value has an empty `kty` and is therefore unsupported by
/// every identity operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawJwk", into = "RawJwk")]
pub struct JsonWebKey {
    pub key: PublicKey,
    pub key_id: Option<String>,
    pub algorithm: Option<String>,
}

impl JsonWebKey {
    /// Wraps a bare key without `kid` or `alg`.
    pub fn new(key: impl Into<PublicKey>) -> Self {
        JsonWebKey {
            key: key.into(),
            key_id: None,
            algorithm: None,
        }
    }
}

impl Default for JsonWebKey {
    fn default() -> Self {
        JsonWebKey {
            key: PublicKey::Unsupported {
                kty: String::new(),
                members: Map::new(),
            },
            key_id: None,
            algorithm: None,
        }
    }
}

/// Member-level view of a JWK used for (de)serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawJwk {
    kty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    e: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<String>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

impl RawJwk {
    fn required(&self, value: &Option<String>, name: &str) -> Result<Vec<u8>, KeyError> {
        let text = value.as_deref().ok_or_else(|| KeyError::InvalidKey {
            kty: self.kty.clone(),
            reason: format!("missing member {:?}", name),
        })?;
        b64_decode(text).map_err(|e| KeyError::InvalidKey {
            kty: self.kty.clone(),
            reason: format!("member {:?}: {}", name, e),
        })
    }

    fn into_unsupported(self) -> PublicKey {
        let mut members = self.other;
        for (name, value) in [
            ("n", self.n),
            ("e", self.e),
            ("crv", self.crv),
            ("x", self.x),
            ("y", self.y),
        ] {
            if let Some(value) = value {
                members.insert(name.to_string(), Value::String(value));
            }
        }
        PublicKey::Unsupported {
            kty: self.kty,
            members,
        }
    }

    fn parse_rsa(&self) -> Result<PublicKey, KeyError> {
        let n = self.required(&self.n, "n")?;
        let e = self.required(&self.e, "e")?;
        RsaPublicKey::new_with_max_size(
            BigUint::from_bytes_be(&n),
            BigUint::from_bytes_be(&e),
            MAX_RSA_MODULUS_BITS,
        )
            .map(PublicKey::Rsa)
            .map_err(|err| KeyError::InvalidKey {
                kty: self.kty.clone(),
                reason: err.to_string(),
            })
    }

    fn parse_secp256k1(&self) -> Result<PublicKey, KeyError> {
        let x = self.required(&self.x, "x")?;
        let y = self.required(&self.y, "y")?;
        if x.len() != COORDINATE_LEN || y.len() != COORDINATE_LEN {
            return Err(KeyError::InvalidKey {
                kty: self.kty.clone(),
                reason: format!("coordinates must be {} bytes", COORDINATE_LEN),
            });
        }
        let mut sec1 = Vec::with_capacity(1 + 2 * COORDINATE_LEN);
        sec1.push(0x04);
        sec1.extend_from_slice(&x);
        sec1.extend_from_slice(&y);
        k256::PublicKey::from_sec1_bytes(&sec1)
            .map(PublicKey::Secp256k1)
            .map_err(|_| KeyError::InvalidKey {
                kty: self.kty.clone(),
                reason: "point is not on the secp256k1 curve".to_string(),
            })
    }
}

impl TryFrom<RawJwk> for JsonWebKey {
    type Error = KeyError;

    fn try_from(raw: RawJwk) -> Result<Self, Self::Error> {
        let key_id = raw.kid.clone();
        let algorithm = raw.alg.clone();
        let key = if raw.kty == "RSA" {
            raw.parse_rsa()?
        } else if raw.kty == "EC" && raw.crv.as_deref() == Some(CURVE_SECP256K1) {
            raw.parse_secp256k1()?
        } else {
            raw.into_unsupported()
        };
        Ok(JsonWebKey {
            key,
            key_id,
            algorithm,
        })
    }
}

impl From<JsonWebKey> for RawJwk {
    fn from(jwk: JsonWebKey) -> Self {
        let mut raw = RawJwk {
            kty: jwk.key.kty().to_string(),
            kid: jwk.key_id,
            alg: jwk.algorithm,
            ..RawJwk::default()
        };
        match jwk.key {
            PublicKey::Rsa(key) => {
                raw.n = Some(b64_encode(&key.n().to_bytes_be()));
                raw.e = Some(b64_encode(&key.e().to_bytes_be()));
            }
            PublicKey::Secp256k1(key) => {
                let point = key.to_encoded_point(false);
                raw.crv = Some(CURVE_SECP256K1.to_string());
                raw.x = point.x().map(|x| b64_encode(x));
                raw.y = point.y().map(|y| b64_encode(y));
            }
            PublicKey::Unsupported { members, .. } => {
                raw.other = members;
            }
        }
        raw
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_parse_rsa() {
        let jwk: JsonWebKey = serde_json::from_str(JWK_1_JSON).unwrap();
        match &jwk.key {
            PublicKey::Rsa(key) => {
                assert_eq!(key.n().bits(), 2048);
                assert_eq!(key.e(), &BigUint::from(65537u32));
            }
            other => panic!("expected RSA key, got {:?}", other),
        }
        assert_eq!(jwk.key_id, None);
    }

    #[test]
    fn test_large_rsa_modulus() {
        let jwk = |bytes: usize| {
            serde_json::json!({ "kty": "RSA", "n": b64_encode(&vec![0xff; bytes]), "e": "AQAB" })
        };

        let big: JsonWebKey = serde_json::from_value(jwk(1024)).unwrap();
        match &big.key {
            PublicKey::Rsa(key) => assert_eq!(key.n().bits(), 8192),
            other => panic!("expected RSA key, got {:?}", other),
        }
        let _: JsonWebKey = serde_json::from_value(jwk(MAX_RSA_MODULUS_BITS / 8)).unwrap();
        assert!(serde_json::from_value::<JsonWebKey>(jwk(MAX_RSA_MODULUS_BITS / 8 + 1)).is_err());
    }

    #[test]
    fn test_rsa_serializes_minimal_exponent() {
        let jwk: JsonWebKey = serde_json::from_str(JWK_1_JSON).unwrap();
        let value = serde_json::to_value(&jwk).unwrap();
        assert_eq!(value["kty"], "RSA");
        assert_eq!(value["e"], "AQAB");
        let back: JsonWebKey = serde_json::from_value(value).unwrap();
        assert_eq!(back, jwk);
    }

    #[test]
    fn test_parse_secp256k1() {
        let jwk: JsonWebKey = serde_json::from_str(EC_JSON).unwrap();
        assert!(matches!(jwk.key, PublicKey::Secp256k1(_)));
        let value = serde_json::to_value(&jwk).unwrap();
        assert_eq!(value["crv"], CURVE_SECP256K1);
        assert_eq!(value["x"], "eb5mfvncu6xVoGKVzocLBwKb_NstzijZWfKBWxb4F5g");
    }

    #[test]
    fn test_unknown_types_are_kept() {
        let jwk: JsonWebKey = serde_json::from_str(OCT_JSON).unwrap();
        assert_eq!(jwk.key.kty(), "oct");
        let value = serde_json::to_value(&jwk).unwrap();
        assert_eq!(value["k"], "GawgguFyGrWKav7AX4VKUg");

        let p384 = r#"{"kty":"EC","crv":"P-384","x":"AA","y":"AA","kid":"k1"}"#;
        let jwk: JsonWebKey = serde_json::from_str(p384).unwrap();
        assert!(matches!(jwk.key, PublicKey::Unsupported { .. }));
        assert_eq!(jwk.key_id.as_deref(), Some("k1"));
    }

    #[test]
    fn test_malformed_members_rejected() {
        assert!(serde_json::from_str::<JsonWebKey>(r#"{"kty":"RSA","e":"AQAB"}"#).is_err());
        assert!(serde_json::from_str::<JsonWebKey>(r#"{"kty":"RSA","n":"!!","e":"AQAB"}"#).is_err());
        let off_curve = r#"{"kty":"EC","crv":"secp256k1",
            "x":"eb5mfvncu6xVoGKVzocLBwKb_NstzijZWfKBWxb4F5g",
            "y":"eb5mfvncu6xVoGKVzocLBwKb_NstzijZWfKBWxb4F5g"}"#;
        assert!(serde_json::from_str::<JsonWebKey>(off_curve).is_err());
    }

    #[test]
    fn test_default_is_unsupported() {
        let jwk = JsonWebKey::default();
        assert_eq!(jwk.key.kty(), "");
    }
}
