//! Alert manager implementation
//!
//! Owns the registered sensors and notifiers, evaluates every sensor on
//! demand, records alerts and dispatches them to every notifier.

use super::notifier::{Delivery, Notifier};
use super::types::{AlertRecord, Severity};
use crate::config::SystemConfig;
use crate::error::{DomainError, Result};
use crate::sensors::Sensor;

/// Number of alerts shown in the report's recent section
pub const RECENT_ALERTS: usize = 5;

/// Alert manager
///
/// Registration is append-only. History grows until [`clear_history`] is
/// called.
///
/// [`clear_history`]: AlertManager::clear_history
pub struct AlertManager {
    /// Sensors in registration order
    sensors: Vec<Box<dyn Sensor>>,
    /// Notifiers in registration order
    notifiers: Vec<Box<dyn Notifier>>,
    /// System settings, validated but not enforced here
    config: SystemConfig,
    /// Recorded alerts, oldest first
    history: Vec<AlertRecord>,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(config: SystemConfig) -> Self {
        if !config.validate() {
            log::warn!("System configuration is invalid: {:?}", config);
        }
        Self {
            sensors: Vec::new(),
            notifiers: Vec::new(),
            config,
            history: Vec::new(),
        }
    }

    /// Register a sensor
    ///
    /// # Errors
    /// Returns `DomainError::DuplicateSensor` if the id is already taken
    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) -> Result<()> {
        if self.sensor(sensor.id()).is_some() {
            return Err(DomainError::DuplicateSensor(sensor.id().to_string()).into());
        }
        log::info!("Sensor {} added to the system", sensor.id());
        self.sensors.push(sensor);
        Ok(())
    }

    /// Register a notifier
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        log::info!("Notifier {} added to the system", notifier.name());
        self.notifiers.push(notifier);
    }

    /// Feed a raw reading to a registered sensor
    ///
    /// # Errors
    /// Returns `DomainError::UnknownSensor` for an unregistered id and
    /// `DomainError::NonFiniteReading` for NaN or infinite values
    pub fn record_reading(&mut self, sensor_id: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteReading(sensor_id.to_string()).into());
        }
        let sensor = self
            .sensors
            .iter_mut()
            .find(|s| s.id() == sensor_id)
            .ok_or_else(|| DomainError::UnknownSensor(sensor_id.to_string()))?;
        sensor.record(value);
        log::debug!(
            "Sensor {}: reading {} (avg={:.2})",
            sensor_id,
            value,
            sensor.average()
        );
        Ok(())
    }

    /// Look up a sensor by id
    pub fn sensor(&self, sensor_id: &str) -> Option<&dyn Sensor> {
        self.sensors
            .iter()
            .find(|s| s.id() == sensor_id)
            .map(|s| s.as_ref())
    }

    /// Registered sensors
    pub fn sensors(&self) -> impl Iterator<Item = &dyn Sensor> {
        self.sensors.iter().map(|s| s.as_ref())
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Recorded alerts, oldest first
    pub fn history(&self) -> &[AlertRecord] {
        &self.history
    }

    /// Evaluate every sensor and notify for each one that is alerting
    ///
    /// Sensors are visited in registration order; each alert is recorded
    /// and then sent to every notifier in registration order. A failed
    /// delivery never stops the cycle. Returns the alerts raised.
    pub fn evaluate_and_notify(&mut self) -> Vec<AlertRecord> {
        let mut raised = Vec::new();

        for sensor in &self.sensors {
            if !sensor.is_alerting() {
                continue;
            }

            let average = sensor.average();
            let message = format!(
                "ALERT: Sensor {} at threshold (avg={:.2})",
                sensor.id(),
                average
            );
            let record = AlertRecord::new(sensor.id(), message, Severity::Warning, average);
            self.history.push(record.clone());

            for notifier in &self.notifiers {
                match notifier.send(record.message()) {
                    Delivery::Sent { .. } => {}
                    outcome => log::debug!("Delivery via {} not sent: {}", notifier.name(), outcome),
                }
            }

            raised.push(record);
        }

        log::debug!(
            "Evaluated {} sensors, {} alerting",
            self.sensors.len(),
            raised.len()
        );
        raised
    }

    /// Build the textual status report
    pub fn generate_report(&self) -> String {
        let mut report = String::from("=== SYSTEM REPORT ===\n");
        report.push_str(&format!("Active sensors: {}\n", self.sensors.len()));
        report.push_str(&format!("Notifiers: {}\n", self.notifiers.len()));
        report.push_str(&format!("Recorded alerts: {}\n\n", self.history.len()));

        report.push_str("Sensor status:\n");
        for sensor in &self.sensors {
            report.push_str(&format!("- {}\n", sensor.status_line()));
        }

        if !self.history.is_empty() {
            report.push_str("\nRecent alerts:\n");
            for record in self.recent_alerts(RECENT_ALERTS) {
                report.push_str(&format!("- {}\n", record));
            }
        }

        report
    }

    /// The last `count` alerts, oldest first
    pub fn recent_alerts(&self, count: usize) -> &[AlertRecord] {
        let start = self.history.len().saturating_sub(count);
        &self.history[start..]
    }

    /// Remove every recorded alert, returning how many were removed
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.len();
        self.history.clear();
        log::info!("History cleared: {} alerts removed", removed);
        removed
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new(SystemConfig::default())
    }
}
