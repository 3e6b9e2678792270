// src/models/mod.rs
//! Value types carried through protocol messages and storage.

pub mod acme_url;
pub mod jwk;
pub mod serial;
