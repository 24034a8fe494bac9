//! Configuration system
//!
//! Handles TOML config file parsing, CLI argument merging and building an
//! [`AlertManager`] from sensor and notifier definitions.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::alerts::{
    AlertManager, ConsoleNotifier, EmailNotifier, Notifier, Severity, SmsNotifier,
    WebhookNotifier,
};
use crate::error::Result;
use crate::sensors::{SensorFactory, SensorKind, WindowSize, DEFAULT_LOCATION};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// System settings
    pub system: SystemConfig,
    /// Sensor definitions
    pub sensors: Vec<SensorConfig>,
    /// Notifier definitions
    pub notifiers: Vec<NotifierConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            sensors: vec![
                SensorConfig::new("TEMP_001", SensorKind::Temperature)
                    .at("Server room")
                    .threshold(75.0),
                SensorConfig::new("VIB_001", SensorKind::Vibration)
                    .at("Main motor")
                    .threshold(2.0),
                SensorConfig::new("HUM_001", SensorKind::Humidity)
                    .at("Warehouse")
                    .threshold(80.0),
            ],
            notifiers: vec![
                NotifierConfig::Email {
                    recipient: "admin@company.com".to_string(),
                    smtp_host: Some("smtp.company.com".to_string()),
                },
                NotifierConfig::Webhook {
                    url: "https://api.company.com/alerts".to_string(),
                },
                NotifierConfig::Sms {
                    number: "555-123-4567".to_string(),
                    provider: Some("Twilio".to_string()),
                },
            ],
        }
    }
}

impl Config {
    /// Build an alert manager with every configured sensor and notifier
    ///
    /// # Errors
    /// Returns a domain error if two sensors share an id
    pub fn build_manager(&self) -> Result<AlertManager> {
        let mut manager = AlertManager::new(self.system.clone());
        for sensor in &self.sensors {
            manager.add_sensor(SensorFactory::from_config(sensor))?;
        }
        for notifier in &self.notifiers {
            manager.add_notifier(notifier.to_notifier());
        }
        Ok(manager)
    }
}

/// System settings
///
/// Only validated; rate limiting and log file output are left to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Seconds between evaluation cycles
    pub polling_interval_seconds: u64,
    /// Alert budget per hour
    pub max_alerts_per_hour: u32,
    /// One of DEBUG, INFO, WARNING, ERROR
    pub log_level: String,
    /// Directory for alert logs
    pub log_path: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            polling_interval_seconds: 10,
            max_alerts_per_hour: 50,
            log_level: "INFO".to_string(),
            log_path: "./logs/".to_string(),
        }
    }
}

impl SystemConfig {
    /// Check every field is within range
    pub fn validate(&self) -> bool {
        self.polling_interval_seconds > 0
            && self.max_alerts_per_hour > 0
            && self.severity().is_some()
    }

    /// The configured log level, if recognized
    pub fn severity(&self) -> Option<Severity> {
        self.log_level.parse().ok()
    }

    /// `log` filter for the configured level, if recognized
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.severity().map(|s| s.level_filter())
    }
}

/// Sensor definition (TOML-friendly format)
///
/// `threshold` is the upper temperature threshold, the vibration RMS
/// threshold or the humidity threshold depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Unique sensor id
    pub id: String,
    /// Sensor variant
    pub kind: SensorKind,
    /// Descriptive location
    #[serde(default = "default_location")]
    pub location: String,
    /// Number of readings in the rolling window
    #[serde(default)]
    pub window_size: WindowSize,
    /// Added to every raw reading
    #[serde(default)]
    pub calibration_offset: f64,
    /// Primary alert threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Lower temperature threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_threshold: Option<f64>,
    /// Temperature unit label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Vibration sampling frequency in Hz
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// Humidity environment type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl SensorConfig {
    /// Definition with every optional field unset
    pub fn new(id: impl Into<String>, kind: SensorKind) -> Self {
        Self {
            id: id.into(),
            kind,
            location: default_location(),
            window_size: WindowSize::default(),
            calibration_offset: 0.0,
            threshold: None,
            min_threshold: None,
            unit: None,
            frequency: None,
            environment: None,
        }
    }

    /// Set the location
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the primary threshold
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Notifier definition (TOML-friendly format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotifierConfig {
    Email {
        recipient: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        smtp_host: Option<String>,
    },
    Webhook {
        url: String,
    },
    Sms {
        number: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        provider: Option<String>,
    },
    Console {
        #[serde(default)]
        stderr: bool,
    },
}

impl NotifierConfig {
    /// Build the notifier
    pub fn to_notifier(&self) -> Box<dyn Notifier> {
        match self {
            Self::Email {
                recipient,
                smtp_host,
            } => Box::new(EmailNotifier::with_host(
                recipient.as_str(),
                smtp_host
                    .as_deref()
                    .unwrap_or(EmailNotifier::DEFAULT_SMTP_HOST),
            )),
            Self::Webhook { url } => Box::new(WebhookNotifier::new(url.as_str())),
            Self::Sms { number, provider } => Box::new(SmsNotifier::with_provider(
                number.as_str(),
                provider.as_deref().unwrap_or(SmsNotifier::DEFAULT_PROVIDER),
            )),
            Self::Console { stderr } => {
                if *stderr {
                    Box::new(ConsoleNotifier::new())
                } else {
                    Box::new(ConsoleNotifier::stdout())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.system.validate());
        assert_eq!(config.system.polling_interval_seconds, 10);
        assert_eq!(config.system.max_alerts_per_hour, 50);
        assert_eq!(config.sensors.len(), 3);
        assert_eq!(config.notifiers.len(), 3);
    }

    #[test]
    fn test_system_config_validation() {
        let mut system = SystemConfig::default();
        assert!(system.validate());

        system.polling_interval_seconds = 0;
        assert!(!system.validate());

        system = SystemConfig::default();
        system.max_alerts_per_hour = 0;
        assert!(!system.validate());

        system = SystemConfig::default();
        system.log_level = "WARN".to_string();
        assert!(!system.validate());

        system.log_level = "WARNING".to_string();
        assert!(system.validate());
        assert_eq!(system.level_filter(), Some(log::LevelFilter::Warn));
    }

    #[test]
    fn test_build_manager() {
        let manager = Config::default().build_manager().unwrap();
        assert_eq!(manager.sensor_count(), 3);
        assert_eq!(manager.notifier_count(), 3);
        assert_eq!(manager.sensor("VIB_001").unwrap().location(), "Main motor");
    }

    #[test]
    fn test_build_manager_duplicate_ids() {
        let mut config = Config::default();
        config.sensors.push(SensorConfig::new("TEMP_001", SensorKind::Humidity));
        assert!(config.build_manager().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [system]
            polling_interval_seconds = 30
            log_level = "DEBUG"

            [[sensors]]
            id = "T1"
            kind = "temperature"
            window_size = 3
            threshold = 60.0
            unit = "F"

            [[notifiers]]
            kind = "webhook"
            url = "http://localhost:9000/hook"

            [[notifiers]]
            kind = "console"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.system.polling_interval_seconds, 30);
        assert_eq!(config.system.max_alerts_per_hour, 50);
        assert_eq!(config.sensors[0].window_size.get(), 3);
        assert_eq!(config.sensors[0].location, DEFAULT_LOCATION);
        assert_eq!(
            config.notifiers[0],
            NotifierConfig::Webhook {
                url: "http://localhost:9000/hook".to_string()
            }
        );
        assert_eq!(config.notifiers[1], NotifierConfig::Console { stderr: false });
    }

    #[test]
    fn test_parse_rejects_zero_window() {
        let toml_str = r#"
            [[sensors]]
            id = "T1"
            kind = "temperature"
            window_size = 0
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
