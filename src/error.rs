//! Unified error types for sensorwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! Notifier validation failures are deliberately absent here: they are
//! reported as a [`Delivery`](crate::alerts::Delivery) outcome and never
//! cross the evaluation cycle.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Malformed line on the reading input stream
    #[error("Invalid reading input: {0}")]
    InvalidInput(String),

    /// IO error (file operations, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Window size must hold at least one reading
    #[error("Invalid window size: {0} (must be at least 1)")]
    InvalidWindowSize(usize),

    /// A sensor with this id is already registered
    #[error("Sensor '{0}' is already registered")]
    DuplicateSensor(String),

    /// No sensor registered under this id
    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    /// Readings must be finite numbers
    #[error("Reading for sensor '{0}' is not a finite number")]
    NonFiniteReading(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Failed to parse config file
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
