//! Provider configuration.
//!
//! The only setting is the API `host`. A value given in the configuration
//! block wins; otherwise the `HOST` environment variable is used. An empty
//! result is an error rather than a client pointed at nowhere.

use serde::Deserialize;

use crate::api::Api;
use crate::error::ConfigError;

/// Environment variable consulted when the configuration block has no host.
pub const HOST_ENV: &str = "HOST";

/// The provider configuration block as written by the practitioner.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    pub host: Option<String>,
}

impl ProviderConfig {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Resolved configuration, ready to build an [`Api`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
}

impl Config {
    /// Resolve against the process environment.
    pub fn resolve(block: &ProviderConfig) -> Result<Self, ConfigError> {
        Self::resolve_with(block, std::env::var(HOST_ENV).ok())
    }

    /// Resolve against an explicit `HOST` value.
    pub fn resolve_with(block: &ProviderConfig, env_host: Option<String>) -> Result<Self, ConfigError> {
        let host = block.host.clone().or(env_host).unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::MissingHost);
        }
        Ok(Self { host })
    }

    pub fn api(&self) -> Api {
        tracing::debug!(host = %self.host, "creating bootcamp client");
        Api::new(&self.host)
    }
}
