//! Configuration file loading
//!
//! Handles loading and saving configuration as TOML files.

use crate::config::Config;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        log::debug!("Parsed config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(config).map_err(ConfigError::from)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        log::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Load configuration from default locations
    pub fn load_default() -> Option<Config> {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load(&path) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return Some(config);
                    }
                    Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
                }
            }
        }
        None
    }

    /// Get default configuration file paths, lowest priority first
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/sensorwatch/config.toml"));

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sensorwatch").join("config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("sensorwatch.toml"));

        paths
    }

    /// Path `config init` writes to when none is given
    pub fn user_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("sensorwatch").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("sensorwatch.toml"))
    }
}
