//! Configuration management for lubimyczytac-rss

use serde::Deserialize;
use std::env;
use thiserror::Error;
use url::Url;

use crate::lubimyczytac::default_base_url;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for handling one inbound request
    pub request_timeout_secs: u64,
}

/// Where author pages are fetched from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub base_url: Url,
    /// Timeout for one outbound page fetch
    pub timeout_secs: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9234,
                request_timeout_secs: 10,
            },
            source: SourceConfig {
                base_url: default_base_url(),
                timeout_secs: 5,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_or(&lookup, "SERVER_PORT", defaults.server.port)?,
                request_timeout_secs: parse_or(
                    &lookup,
                    "REQUEST_TIMEOUT_SECS",
                    defaults.server.request_timeout_secs,
                )?,
            },
            source: SourceConfig {
                base_url: parse_or(&lookup, "LUBIMYCZYTAC_BASE_URL", defaults.source.base_url)?,
                timeout_secs: parse_or(&lookup, "FETCH_TIMEOUT_SECS", defaults.source.timeout_secs)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
