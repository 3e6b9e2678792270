// src/utils/crypto.rs
//! Hashing and comparison utilities for key identities and fingerprints.
//!
//! Uses SHA-256 (via `ring`) for every digest in the crate; there is no
//! algorithm negotiation.

use ring::digest::{digest, SHA256};
use subtle::ConstantTimeEq;

/// Length in bytes of a SHA-256 fingerprint.
pub const FINGERPRINT_LEN: usize = 32;

/// Computes a SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Binary data to hash (as bytes slice)
///
/// # Returns
/// Fixed-size 32-byte array (`[u8; 32]`) containing the hash.
pub fn hash_data(data: &[u8]) -> [u8; FINGERPRINT_LEN] {
    let mut out = [0u8; FINGERPRINT_LEN];
    out.copy_from_slice(digest(&SHA256, data).as_ref());
    out
}

/// Computes the SHA-256 fingerprint of a DER blob (certificate, CSR, SPKI).
pub fn fingerprint256(data: &[u8]) -> [u8; FINGERPRINT_LEN] {
    hash_data(data)
}

/// Compares two byte slices without an early exit on the first difference.
///
/// # Returns
/// `true` only if both slices have the same length and identical content.
///
/// # Timing
/// Lengths are not secret (fingerprints are fixed-size), so a length mismatch
/// returns immediately. For equal lengths `subtle` accumulates the difference
/// of every byte pair behind an optimization barrier, so running time does
/// not depend on where the first mismatch sits.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Checks a candidate DER blob against a previously stored fingerprint.
///
/// # Arguments
/// * `candidate` - Raw bytes presented now (e.g. a certificate in DER form)
/// * `expected` - Stored SHA-256 fingerprint of the trusted blob
///
/// # Returns
/// `true` if `SHA-256(candidate)` equals `expected`, compared in constant time.
pub fn fingerprint_equals(candidate: &[u8], expected: &[u8]) -> bool {
    constant_time_eq(&fingerprint256(candidate), expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUF: [u8; 8] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    const FP: [u8; 32] = [
        0x8a, 0x85, 0x1f, 0xf8, 0x2e, 0xe7, 0x04, 0x8a, 0xd0, 0x9e, 0xc3, 0x84, 0x7f, 0x1d, 0xdf,
        0x44, 0x94, 0x41, 0x04, 0xd2, 0xcb, 0xd1, 0x7e, 0xf4, 0xe3, 0xdb, 0x22, 0xc6, 0x78, 0x5a,
        0x0d, 0x45,
    ];

    #[test]
    fn test_fingerprint_fixture() {
        assert_eq!(fingerprint256(&BUF), FP);
        assert!(fingerprint_equals(&BUF, &FP));
    }

    #[test]
    fn test_fingerprint_single_bit_mutations() {
        for i in 0..BUF.len() * 8 {
            let mut buf = BUF;
            buf[i / 8] ^= 1 << (i % 8);
            assert!(!fingerprint_equals(&buf, &FP), "candidate bit {} flipped", i);
        }
        for i in 0..FP.len() * 8 {
            let mut fp = FP;
            fp[i / 8] ^= 1 << (i % 8);
            assert!(!fingerprint_equals(&BUF, &fp), "fingerprint bit {} flipped", i);
        }
    }

    #[test]
    fn test_fingerprint_length_mismatch() {
        assert!(!fingerprint_equals(&BUF, &FP[..31]));
        assert!(!fingerprint_equals(&BUF, &[]));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        // difference in the first byte only
        assert!(!constant_time_eq(b"xbc", b"abc"));
        // a shared prefix does not make unequal lengths match
        assert!(!constant_time_eq(&FP, &FP[..16]));
        assert!(!constant_time_eq(&[], &FP));
    }
}
