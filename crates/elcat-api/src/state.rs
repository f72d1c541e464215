//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! AppState holds the static configuration read once at startup and the
//! [`CatalogReader`] through which every handler reaches the catalog. The
//! current snapshot lives in a [`CatalogHandle`] shared with the
//! [`RefreshScheduler`](crate::refresh::RefreshScheduler); nothing here is a
//! process-wide global.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use elcat_core::CatalogHandle;
use elcat_store::{AssetBundle, FileStore};
use thiserror::Error;

use crate::reader::CatalogReader;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 20202;

/// Default refresh cadence.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Error building [`AppConfig`] from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that cannot be used.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        /// Environment variable name.
        var: &'static str,
        /// The offending value.
        value: String,
        /// What was expected.
        reason: &'static str,
    },
}

/// Application configuration. Static for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Directory holding one JSON file per election.
    pub elections_dir: PathBuf,
    /// Directory holding the SVG asset bundle.
    pub svg_dir: PathBuf,
    /// Directory served for every path no API route claims.
    pub static_dir: PathBuf,
    /// Time between refresh cycles.
    pub refresh_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            elections_dir: PathBuf::from("./elections"),
            svg_dir: PathBuf::from("./svgs"),
            static_dir: PathBuf::from("./static"),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// | Variable                | Field              |
    /// |-------------------------|--------------------|
    /// | `PORT`                  | `port`             |
    /// | `ELECTIONS_DIR`         | `elections_dir`    |
    /// | `SVG_DIR`               | `svg_dir`          |
    /// | `STATIC_DIR`            | `static_dir`       |
    /// | `REFRESH_INTERVAL_SECS` | `refresh_interval` |
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: value.clone(),
                reason: "expected a port number",
            })?;
        }
        if let Some(value) = lookup("ELECTIONS_DIR") {
            config.elections_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("SVG_DIR") {
            config.svg_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("REFRESH_INTERVAL_SECS") {
            config.refresh_interval = parse_interval("REFRESH_INTERVAL_SECS", &value)?;
        }

        Ok(config)
    }
}

/// Parse a refresh interval in whole seconds. Zero is rejected.
pub fn parse_interval(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "refresh interval must be at least one second",
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "expected a whole number of seconds",
        }),
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Startup configuration.
    pub config: Arc<AppConfig>,
    /// Owner of the current catalog snapshot.
    pub catalog: CatalogHandle,
    /// Read-side contract used by the route handlers.
    pub reader: Arc<CatalogReader>,
}

impl AppState {
    /// Create state for `config` with an empty catalog.
    pub fn new(config: AppConfig) -> Self {
        let catalog = CatalogHandle::new();
        let reader = CatalogReader::new(
            catalog.clone(),
            FileStore::new(&config.elections_dir),
            AssetBundle::new(&config.svg_dir),
        );
        Self {
            config: Arc::new(config),
            catalog,
            reader: Arc::new(reader),
        }
    }

    /// The elections store this state reads from.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.config.elections_dir)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
