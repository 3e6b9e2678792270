// src/lib.rs

//! # acme-core
//!
//! Identity and integrity primitives for an automated certificate-issuance
//! (ACME) service.
//!
//! ## Components
//! 1. **Challenge tokens**: [`new_token`] draws 32 bytes from the OS CSPRNG
//! 2. **Serial numbers**: [`serial_to_string`] / [`string_to_serial`] convert
//!    between integers and the 32-digit hex form
//! 3. **Key identities**: [`key_digest`] hashes a key's SubjectPublicKeyInfo,
//!    [`jwk_thumbprint`] computes the RFC 7638 thumbprint
//! 4. **Constant-time comparison**: [`key_digest_equals`], [`fingerprint_equals`]
//! 5. **URL values**: [`AcmeUrl`] carries parsed URLs as plain JSON strings
//!
//! Every function is pure and synchronous; the only shared resource is the
//! operating system randomness source.

pub mod build_info;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod utils;

pub use error::{CoreError, EncodingError, KeyError, SerialError};
pub use keys::{jwk_thumbprint, key_authorization, key_digest, key_digest_equals, KeyMaterial};
pub use models::acme_url::AcmeUrl;
pub use models::jwk::{JsonWebKey, PublicKey};
pub use models::serial::{serial_to_string, string_to_serial, Serial};
pub use utils::crypto::{constant_time_eq, fingerprint256, fingerprint_equals};
pub use utils::random::{new_token, new_token_from};
