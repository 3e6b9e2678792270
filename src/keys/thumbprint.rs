// src/keys/thumbprint.rs
//! JWK thumbprints (RFC 7638) and ACME key authorizations.
//!
//! A thumbprint hashes the canonical JSON of a key's required members, so it
//! is independent of member order, whitespace, `kid`/`alg` and redundant
//! leading zeros in the encoded integers.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::traits::PublicKeyParts;
use serde_json::json;

use crate::error::KeyError;
use crate::keys::material::{CanonicalKey, KeyMaterial};
use crate::models::jwk::CURVE_SECP256K1;
use crate::utils::crypto::hash_data;
use crate::utils::encoding::b64_encode;

/// Computes the RFC 7638 SHA-256 thumbprint of a public key.
///
/// # Returns
/// - `Ok(String)`: base64url digest without padding (43 characters)
/// - `Err(KeyError::UnknownKeyType)` for unsupported keys
pub fn jwk_thumbprint<K: KeyMaterial>(key: K) -> Result<String, KeyError> {
    let input = thumbprint_input(key)?;
    Ok(b64_encode(&hash_data(input.as_bytes())))
}

/// Renders the required members of `key` as the JSON text that gets hashed.
///
/// `serde_json::Map` is ordered by key (the `preserve_order` feature is not
/// enabled) and compact output has no whitespace, which is exactly the
/// RFC 7638 form.
fn thumbprint_input<K: KeyMaterial>(key: K) -> Result<String, KeyError> {
    let members = match key.canonical_key()? {
        CanonicalKey::Rsa(key) => json!({
            "e": b64_encode(&key.e().to_bytes_be()),
            "kty": "RSA",
            "n": b64_encode(&key.n().to_bytes_be()),
        }),
        CanonicalKey::Secp256k1(key) => {
            let point = key.to_encoded_point(false);
            let (x, y) = match (point.x(), point.y()) {
                (Some(x), Some(y)) => (x, y),
                _ => return Err(KeyError::Encoding("point at infinity".to_string())),
            };
            json!({
                "crv": CURVE_SECP256K1,
                "kty": "EC",
                "x": b64_encode(x),
                "y": b64_encode(y),
            })
        }
    };
    serde_json::to_string(&members).map_err(|err| KeyError::Encoding(err.to_string()))
}

/// Builds the key authorization string for a challenge: `token.thumbprint`.
pub fn key_authorization<K: KeyMaterial>(token: &str, key: K) -> Result<String, KeyError> {
    Ok(format!("{}.{}", token, jwk_thumbprint(key)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::jwk::fixtures::*;
    use crate::models::jwk::JsonWebKey;

    #[test]
    fn test_rfc7638_example() {
        let jwk: JsonWebKey = serde_json::from_str(
            r#"{
  "kty": "RSA",
  "n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw",
  "e": "AQAB",
  "alg": "RS256",
  "kid": "2011-04-29"
}"#,
        )
        .unwrap();
        assert_eq!(
            jwk_thumbprint(&jwk).unwrap(),
            "NzbLsXh8uDCcd-6MNwXF4W_7noWXFZAfHkxZsRGC9Xs"
        );
    }

    #[test]
    fn test_thumbprint_input_is_sorted_and_compact() {
        let jwk: JsonWebKey = serde_json::from_str(EC_JSON).unwrap();
        let input = thumbprint_input(&jwk).unwrap();
        assert!(input.starts_with(r#"{"crv":"secp256k1","kty":"EC","x":""#));
        assert!(!input.contains(' '));
        assert!(!input.contains('\n'));

        // members arrive in a different order and with extra fields
        let jwk: JsonWebKey = serde_json::from_str(
            r#"{"n": "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw", "kid": "k", "e": "AQAB", "kty": "RSA"}"#,
        )
        .unwrap();
        assert_eq!(
            thumbprint_input(&jwk).unwrap(),
            r#"{"e":"AQAB","kty":"RSA","n":"0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw"}"#
        );
    }

    #[test]
    fn test_padded_exponent_is_normalized() {
        // JWK_1 carries e as "AAEAAQ"; the thumbprint uses the minimal "AQAB"
        let jwk: JsonWebKey = serde_json::from_str(JWK_1_JSON).unwrap();
        assert_eq!(
            jwk_thumbprint(&jwk).unwrap(),
            "-kVpHjJCDNQQk-j9BGMpzHAVCiOqvoTRZB-Ov4CAiM4"
        );
        assert_eq!(jwk_thumbprint(&jwk.key).unwrap(), jwk_thumbprint(jwk).unwrap());
    }

    #[test]
    fn test_secp256k1_thumbprint() {
        let jwk: JsonWebKey = serde_json::from_str(EC_JSON).unwrap();
        assert_eq!(
            jwk_thumbprint(&jwk).unwrap(),
            "2JF8vg9etJzjFwZwmkvhBLLZ0bfMVVOPivYR5lFtcec"
        );
    }

    #[test]
    fn test_key_authorization() {
        let jwk: JsonWebKey = serde_json::from_str(JWK_1_JSON).unwrap();
        assert_eq!(
            key_authorization("evaGxfADs6pSRb2LAv9IZf17Dt3juxGJ-PCt92wr-oA", &jwk).unwrap(),
            "evaGxfADs6pSRb2LAv9IZf17Dt3juxGJ-PCt92wr-oA.-kVpHjJCDNQQk-j9BGMpzHAVCiOqvoTRZB-Ov4CAiM4"
        );
        assert!(key_authorization("t", JsonWebKey::default()).is_err());
    }
}
