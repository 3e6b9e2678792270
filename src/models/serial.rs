// src/models/serial.rs
//! Certificate serial number codec.
//!
//! Serials are stored and displayed as exactly 32 lowercase hex characters,
//! left-padded with zeros. Decoding accepts nothing else, so any accepted
//! string re-encodes to itself.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::SerialError;

/// Width of the textual serial form, in hex digits.
pub const SERIAL_LEN: usize = 32;

const MAX_SERIAL_BITS: u64 = (SERIAL_LEN as u64) * 4;

/// Renders a serial number as 32 zero-padded lowercase hex characters.
///
/// # Panics
/// Panics if `serial` needs more than 128 bits. Serials are generated
/// internally within that range; use [`Serial::new`] for untrusted values.
pub fn serial_to_string(serial: &BigUint) -> String {
    assert!(
        serial.bits() <= MAX_SERIAL_BITS,
        "serial number needs {} bits, at most {} fit",
        serial.bits(),
        MAX_SERIAL_BITS
    );
    format!("{:0width$x}", serial, width = SERIAL_LEN)
}

/// Parses the 32-character hex form back into a serial number.
///
/// # Arguments
/// * `s` - Exactly 32 characters from `[0-9a-f]`
///
/// # Errors
/// - [`SerialError::InvalidLength`] if `s` is not 32 characters long
/// - [`SerialError::InvalidDigit`] on the first character outside `[0-9a-f]`
pub fn string_to_serial(s: &str) -> Result<BigUint, SerialError> {
    if s.len() != SERIAL_LEN {
        return Err(SerialError::InvalidLength { actual: s.len() });
    }
    let mut value: u128 = 0;
    for (position, found) in s.char_indices() {
        let digit = match found {
            '0'..='9' | 'a'..='f' => found.to_digit(16),
            _ => None,
        }
        .ok_or(SerialError::InvalidDigit { position, found })?;
        value = (value << 4) | u128::from(digit);
    }
    Ok(BigUint::from(value))
}

/// A serial number known to fit the 32-digit textual form.
///
/// Serializes (serde) as its canonical hex string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Serial(BigUint);

impl Serial {
    /// Wraps `value`, rejecting anything wider than 128 bits.
    pub fn new(value: BigUint) -> Result<Self, SerialError> {
        if value.bits() > MAX_SERIAL_BITS {
            return Err(SerialError::TooLarge { bits: value.bits() });
        }
        Ok(Serial(value))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serial_to_string(&self.0))
    }
}

impl FromStr for Serial {
    type Err = SerialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        string_to_serial(s).map(Serial)
    }
}

impl From<u128> for Serial {
    fn from(value: u128) -> Self {
        Serial(BigUint::from(value))
    }
}

impl Serialize for Serial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Serial {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
