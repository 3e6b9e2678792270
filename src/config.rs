// src/config.rs
//! Runtime settings for the `acme-core` command-line tool.
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. An optional `acme-core.toml` in the working directory
//! 3. Environment variables prefixed `ACME_CORE_` (e.g. `ACME_CORE_LOG_LEVEL`)
//!
//! The library itself reads no configuration; only the binary does.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default configuration file name, without extension.
pub const CONFIG_FILE: &str = "acme-core";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "ACME_CORE";

/// Settings for the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// `env_logger` filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Number of tokens printed by the `token` command
    pub token_count: u32,
}

impl Settings {
    /// Loads settings from defaults, `acme-core.toml` and the environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder(CONFIG_FILE)?.build()?.try_deserialize()
    }

    fn builder(
        file: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("log_level", "info")?
            .set_default("token_count", 1)?
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX)))
    }
}
