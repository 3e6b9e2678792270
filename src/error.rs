// src/error.rs
//! Error types for the core primitives.
//!
//! Each component reports its own failure type so callers can match on the
//! exact cause; [`CoreError`] collects them for layers that only need to
//! bubble a failure up (the command-line tool, request handlers).

use thiserror::Error;

/// Failures while decoding or checking a certificate serial number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerialError {
    /// The textual form is not exactly 32 characters long.
    #[error("Serial number should be 32 characters long")]
    InvalidLength { actual: usize },

    /// A character outside `[0-9a-f]` was found.
    #[error("invalid hex digit {found:?} at position {position} in serial number")]
    InvalidDigit { position: usize, found: char },

    /// The integer needs more than 128 bits (32 hex digits).
    #[error("serial number needs {bits} bits, at most 128 fit in 32 hex digits")]
    TooLarge { bits: u64 },
}

/// Failures while turning a public key into an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key representation (or key type inside it) is not supported.
    #[error("unknown key type {0:?}")]
    UnknownKeyType(String),

    /// The key parameters could not be decoded into a valid public key.
    #[error("invalid {kty} key: {reason}")]
    InvalidKey { kty: String, reason: String },

    /// The canonical DER encoding could not be produced.
    #[error("failed to encode public key: {0}")]
    Encoding(String),
}

/// Failures while decoding base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid base64url input: {0}")]
    Base64(String),
}

/// Any failure surfaced by this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Serial(#[from] SerialError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_length_message() {
        let err = SerialError::InvalidLength { actual: 11 };
        assert_eq!(err.to_string(), "Serial number should be 32 characters long");
    }

    #[test]
    fn test_core_error_wraps_transparently() {
        let err: CoreError = KeyError::UnknownKeyType("oct".to_string()).into();
        assert_eq!(err.to_string(), "unknown key type \"oct\"");
    }
}
