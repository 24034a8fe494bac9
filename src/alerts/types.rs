//! Alert system domain types
//!
//! Defines the severity levels and the immutable alert record.

use crate::error::ConfigError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Diagnostic detail
    Debug,
    /// Informational, no action needed
    Info,
    /// Attention recommended
    Warning,
    /// Action required
    Error,
}

impl Severity {
    /// Every level, lowest first
    pub const ALL: [Severity; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Matching `log` crate filter
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Debug => log::LevelFilter::Debug,
            Self::Info => log::LevelFilter::Info,
            Self::Warning => log::LevelFilter::Warn,
            Self::Error => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    /// Parses the exact upper-case names only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidValue {
                key: "log_level".to_string(),
                message: format!("Unknown level: {}", s),
            }),
        }
    }
}

/// One alert occurrence
///
/// Fields are fixed at construction; the record only exposes read access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRecord {
    sensor_id: String,
    message: String,
    severity: Severity,
    measured_value: f64,
    timestamp: DateTime<Local>,
}

impl AlertRecord {
    /// Create a record stamped with the current local time
    pub fn new(
        sensor_id: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        measured_value: f64,
    ) -> Self {
        Self::with_timestamp(sensor_id, message, severity, measured_value, Local::now())
    }

    /// Create a record with an explicit timestamp
    pub fn with_timestamp(
        sensor_id: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        measured_value: f64,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            message: message.into(),
            severity,
            measured_value,
            timestamp,
        }
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn measured_value(&self) -> f64 {
        self.measured_value
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Serialize to a single-line JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to one comma-delimited line
    ///
    /// The message goes last, single-quoted, since it may contain commas.
    /// Whole values keep their decimal point (`85.0`).
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{:?},'{}'",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.sensor_id,
            self.severity,
            self.measured_value,
            self.message
        )
    }
}

impl fmt::Display for AlertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.sensor_id,
            self.message
        )
    }
}
