// src/build_info.rs
//! Build metadata stamped in at compile time.
//!
//! Release builds set `ACME_CORE_BUILD_ID`, `ACME_CORE_BUILD_TIME` and
//! `ACME_CORE_BUILD_HOST` in the compiler environment; anything left unset
//! reports as `"Unspecified"`.

const UNSPECIFIED: &str = "Unspecified";

fn or_unspecified(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNSPECIFIED,
    }
}

/// Identifier of the source revision this binary was built from.
pub fn build_id() -> &'static str {
    or_unspecified(option_env!("ACME_CORE_BUILD_ID"))
}

/// Time the build ran.
pub fn build_time() -> &'static str {
    or_unspecified(option_env!("ACME_CORE_BUILD_TIME"))
}

/// Host the build ran on.
pub fn build_host() -> &'static str {
    or_unspecified(option_env!("ACME_CORE_BUILD_HOST"))
}
