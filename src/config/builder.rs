//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist and parse; without one the default
    /// locations are searched and the built-in defaults are kept if none
    /// is found.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            self.config = ConfigFile::load(path)?;
        } else if let Some(cfg) = ConfigFile::load_default() {
            self.config = cfg;
        }
        Ok(self)
    }

    /// Override with CLI polling interval
    pub fn with_interval(mut self, interval: Option<u64>) -> Self {
        if let Some(i) = interval {
            self.config.system.polling_interval_seconds = i;
        }
        self
    }

    /// Override with CLI log level
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(l) = level {
            self.config.system.log_level = l;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
