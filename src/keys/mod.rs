// src/keys/mod.rs
//! Public key identities: digests, thumbprints and comparison.

pub mod digest;
pub mod material;
pub mod thumbprint;

pub use digest::{key_digest, key_digest_equals};
pub use material::{CanonicalKey, KeyMaterial};
pub use thumbprint::{jwk_thumbprint, key_authorization};
