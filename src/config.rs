//! Runtime configuration for the actor directory.
//!
//! Values come from serde (for embedding in a host's config file) or from the
//! environment via [`DirectoryConfig::from_env`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding [`DirectoryConfig::table_buffer`].
pub const TABLE_BUFFER_ENV: &str = "ACTOR_DIRECTORY_TABLE_BUFFER";

const DEFAULT_TABLE_BUFFER: usize = 32;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid number")]
    InvalidNumber { key: &'static str, value: String },

    #[error("table_buffer must be at least 1")]
    ZeroBuffer,
}

/// Settings for the table actors started by
/// [`DirectorySystem`](crate::lifecycle::DirectorySystem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Capacity of each table's request channel. Callers wait when it is full.
    pub table_buffer: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            table_buffer: DEFAULT_TABLE_BUFFER,
        }
    }
}

impl DirectoryConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(TABLE_BUFFER_ENV) {
            config.table_buffer = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: TABLE_BUFFER_ENV,
                    value,
                })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_buffer == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        Ok(())
    }
}
