// src/main.rs

//! # acme-core - Command-line entry point
//!
//! Small operator tool over the core primitives, useful when inspecting
//! storage rows or debugging account-key mismatches by hand.
//!
//! ## Commands
//! - `token`: print fresh challenge token(s)
//! - `serial-encode <decimal>`: print the 32-digit hex form of a serial
//! - `serial-decode <hex>`: print the decimal value of a stored serial
//! - `digest <jwk-file>`: print the account-key digest of a JWK
//! - `thumbprint <jwk-file>`: print the RFC 7638 thumbprint of a JWK
//! - `version`: print build information
//!
//! ## Environment Variables
//! - `ACME_CORE_LOG_LEVEL`: (Optional) log filter (default: info)
//! - `ACME_CORE_TOKEN_COUNT`: (Optional) tokens printed by `token` (default: 1)

use acme_core::build_info::{build_host, build_id, build_time};
use acme_core::config::Settings;
use acme_core::{
    jwk_thumbprint, key_digest, new_token, serial_to_string, string_to_serial, JsonWebKey, Serial,
};
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use num_bigint::BigUint;
use std::io::Write;
use std::str::FromStr;

const USAGE: &str = "usage: acme-core <token|serial-encode N|serial-decode HEX|digest FILE|thumbprint FILE|version>";

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let settings = Settings::load().context("failed to load settings")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();
    log::debug!("loaded settings: {:?}", settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    run(&args, &settings, &mut stdout.lock())
}

/// Executes one command line (without the program name), writing results to `out`.
///
/// # Errors
/// Returns a usage error for an unknown command or a missing/extra operand, and
/// the underlying error for invalid serials, unreadable files or unsupported keys.
fn run<W: Write>(args: &[String], settings: &Settings, out: &mut W) -> Result<()> {
    let command = args.first().map(String::as_str).unwrap_or("");
    let operand = args.get(1).map(String::as_str);
    if args.len() > 2 {
        bail!(USAGE);
    }

    match (command, operand) {
        ("token", None) => {
            for _ in 0..settings.token_count {
                writeln!(out, "{}", new_token())?;
            }
        }
        ("serial-encode", Some(n)) => {
            let value = BigUint::from_str(n).with_context(|| format!("not a decimal integer: {}", n))?;
            let serial = Serial::new(value)?;
            writeln!(out, "{}", serial)?;
        }
        ("serial-decode", Some(s)) => {
            let value = string_to_serial(s)?;
            // re-encode so a typo in the stored row is obvious next to the input
            log::debug!("canonical form: {}", serial_to_string(&value));
            writeln!(out, "{}", value)?;
        }
        ("digest", Some(path)) => writeln!(out, "{}", key_digest(&read_jwk(path)?)?)?,
        ("thumbprint", Some(path)) => writeln!(out, "{}", jwk_thumbprint(&read_jwk(path)?)?)?,
        ("version", None) => {
            writeln!(out, "build id:   {}", build_id())?;
            writeln!(out, "build time: {}", build_time())?;
            writeln!(out, "build host: {}", build_host())?;
        }
        _ => bail!(USAGE),
    }
    Ok(())
}

fn read_jwk(path: &str) -> Result<JsonWebKey> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a valid JWK", path))
}
