// src/utils/mod.rs
//! Helper functions shared by the core primitives.

pub mod crypto;
pub mod encoding;
pub mod random;
