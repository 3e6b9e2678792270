// src/utils/encoding.rs
//! Base64 helpers for the JOSE-style encodings used on the wire.
//!
//! ACME carries binary values (token entropy, JWK parameters, thumbprints)
//! as URL-safe base64 without padding. Key digests stored for account lookup
//! use standard padded base64 instead; see [`crate::keys::digest`].

use crate::error::EncodingError;

/// Encodes bytes as URL-safe base64 without padding.
///
/// # Arguments
/// * `data` - The bytes to encode
///
/// # Returns
/// Text safe to embed in URLs, filenames and JSON strings.
pub fn b64_encode(data: &[u8]) -> String {
    base64::encode_config(data, base64::URL_SAFE_NO_PAD)
}

/// Decodes URL-safe base64, with or without trailing `=` padding.
///
/// # Arguments
/// * `data` - base64url text
///
/// # Returns
/// - `Ok(Vec<u8>)` with the decoded bytes
/// - `Err(EncodingError)` if the text contains characters outside the
///   URL-safe alphabet or has an impossible length
pub fn b64_decode(data: &str) -> Result<Vec<u8>, EncodingError> {
    base64::decode_config(data.trim_end_matches('='), base64::URL_SAFE_NO_PAD)
        .map_err(|e| EncodingError::Base64(e.to_string()))
}
