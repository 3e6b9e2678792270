// src/models/acme_url.rs
//! URL values embedded in protocol messages.
//!
//! Directory, challenge and authorization URLs travel as plain JSON strings.
//! [`AcmeUrl`] keeps them parsed in memory together with the text they were
//! parsed from, and writes that text back unchanged. The parser's normalized
//! form (`http://host` becomes `http://host/`) is only used for comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;
use url::Url;

/// A parsed absolute URL with a plain-string wire form.
///
/// Equality and hashing follow the parsed URL, so two spellings of the same
/// URL compare equal even though each serializes as it was received.
#[derive(Debug, Clone)]
pub struct AcmeUrl {
    url: Url,
    text: String,
}

impl AcmeUrl {
    /// Parses `input` with the standard URL rules.
    ///
    /// # Errors
    /// Returns the parser's [`url::ParseError`] for malformed or relative input.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(AcmeUrl {
            url: Url::parse(input)?,
            text: input.to_string(),
        })
    }

    /// The text this value was parsed from (or the URL's own form when built
    /// from an already parsed [`Url`]).
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> Url {
        self.url
    }
}

impl PartialEq for AcmeUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for AcmeUrl {}

impl Hash for AcmeUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl From<Url> for AcmeUrl {
    fn from(url: Url) -> Self {
        let text = url.as_str().to_string();
        AcmeUrl { url, text }
    }
}

impl From<AcmeUrl> for Url {
    fn from(url: AcmeUrl) -> Self {
        url.url
    }
}

impl Deref for AcmeUrl {
    type Target = Url;

    fn deref(&self) -> &Url {
        &self.url
    }
}

impl FromStr for AcmeUrl {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AcmeUrl::parse(s)
    }
}

impl fmt::Display for AcmeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for AcmeUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for AcmeUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AcmeUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}
