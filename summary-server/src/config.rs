//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::Language;

/// Environment variable naming the dataset file.
pub const DATASET_PATH_VAR: &str = "SUMMARY_DATASET_PATH";
/// Environment variable naming the listen address.
pub const LISTEN_ADDR_VAR: &str = "SUMMARY_LISTEN_ADDR";
/// Environment variable naming the fallback stop-name language.
pub const DEFAULT_LANGUAGE_VAR: &str = "SUMMARY_DEFAULT_LANGUAGE";
/// Environment variable giving the reload interval in seconds (0 disables).
pub const RELOAD_SECS_VAR: &str = "SUMMARY_RELOAD_SECS";

/// Default dataset reload interval: 1 hour.
const DEFAULT_RELOAD_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// A configuration value that couldn't be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the summary server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the dataset JSON export
    pub dataset_path: PathBuf,
    /// Address to serve HTTP on
    pub listen_addr: SocketAddr,
    /// Language used when a stop has no name in the requested one
    pub default_language: Language,
    /// How often to reload the dataset; `None` disables reloading
    pub reload_interval: Option<Duration>,
}

impl ServerConfig {
    /// Create a config reading the dataset from `dataset_path`, with
    /// defaults for everything else.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            default_language: Language::english(),
            reload_interval: Some(DEFAULT_RELOAD_INTERVAL),
        }
    }

    /// Set the listen address.
    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    /// Set the fallback language.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Set the reload interval (`None` disables reloading).
    pub fn with_reload_interval(mut self, interval: Option<Duration>) -> Self {
        self.reload_interval = interval;
        self
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATASET_PATH_VAR) {
            config.dataset_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup(LISTEN_ADDR_VAR) {
            config.listen_addr = addr.parse().map_err(|e: std::net::AddrParseError| ConfigError {
                key: LISTEN_ADDR_VAR,
                value: addr.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(code) = lookup(DEFAULT_LANGUAGE_VAR) {
            config.default_language = Language::parse(&code).map_err(|e| ConfigError {
                key: DEFAULT_LANGUAGE_VAR,
                value: code.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(secs) = lookup(RELOAD_SECS_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError {
                key: RELOAD_SECS_VAR,
                value: secs.clone(),
                reason: e.to_string(),
            })?;
            config.reload_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        // Default to a dataset file in the current directory
        Self::new("data.json")
    }
}
