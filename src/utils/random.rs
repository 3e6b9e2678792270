// src/utils/random.rs
//! Challenge token generation.
//!
//! Tokens are 32 bytes drawn from the operating system CSPRNG, rendered with
//! the URL-safe base64 alphabet so they can be dropped into challenge URLs
//! and file names unchanged.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::utils::encoding::b64_encode;

/// Number of random bytes behind every challenge token.
pub const TOKEN_BYTES: usize = 32;

/// Generates a new challenge token from the system randomness source.
///
/// # Returns
/// A 43-character URL-safe base64 string carrying 256 bits of entropy.
///
/// # Panics
/// Panics if the operating system cannot supply random bytes. No safe
/// fallback exists, so the process must not continue issuing challenges.
pub fn new_token() -> String {
    random_string(TOKEN_BYTES)
}

/// Generates a token from a caller-supplied randomness source.
///
/// Production code calls [`new_token`]; this entry point lets tests and
/// embedders drive generation with a seeded or hardware-backed generator.
/// The `CryptoRng` bound keeps non-cryptographic generators out.
pub fn new_token_from<R: RngCore + CryptoRng>(rng: &mut R) -> String {
    random_string_from(rng, TOKEN_BYTES)
}

/// Returns `byte_len` random bytes from the system CSPRNG, base64url-encoded.
///
/// # Panics
/// Panics if the operating system randomness source fails.
pub fn random_string(byte_len: usize) -> String {
    random_string_from(&mut OsRng, byte_len)
}

fn random_string_from<R: RngCore + CryptoRng>(rng: &mut R, byte_len: usize) -> String {
    let mut bytes = vec![0u8; byte_len];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        log::error!("secure randomness source failed: {}", e);
        panic!("secure randomness unavailable: {}", e);
    }
    b64_encode(&bytes)
}
