//! Sensor construction helpers
//!
//! Shorthand constructors for the common sensors plus conversion from
//! configuration entries.

use super::{HumiditySensor, Sensor, SensorKind, TemperatureSensor, VibrationSensor};
use crate::config::SensorConfig;

/// Factory for the built-in sensor variants
pub struct SensorFactory;

impl SensorFactory {
    /// Temperature sensor with a custom upper threshold
    pub fn temperature(id: &str, max_threshold: f64, location: &str) -> TemperatureSensor {
        TemperatureSensor::new(id)
            .with_thresholds(TemperatureSensor::DEFAULT_MIN, max_threshold)
            .with_location(location)
    }

    /// Vibration sensor with a custom RMS threshold
    pub fn vibration(id: &str, rms_threshold: f64, location: &str) -> VibrationSensor {
        VibrationSensor::new(id)
            .with_rms_threshold(rms_threshold)
            .with_location(location)
    }

    /// Humidity sensor with a custom threshold
    pub fn humidity(id: &str, threshold: f64, location: &str) -> HumiditySensor {
        HumiditySensor::new(id)
            .with_threshold(threshold)
            .with_location(location)
    }

    /// Build a sensor from a configuration entry
    ///
    /// Unset optional fields fall back to the variant defaults.
    pub fn from_config(config: &SensorConfig) -> Box<dyn Sensor> {
        match config.kind {
            SensorKind::Temperature => {
                let mut sensor = TemperatureSensor::new(config.id.as_str())
                    .with_window(config.window_size, config.calibration_offset)
                    .with_location(config.location.as_str())
                    .with_thresholds(
                        config.min_threshold.unwrap_or(TemperatureSensor::DEFAULT_MIN),
                        config.threshold.unwrap_or(TemperatureSensor::DEFAULT_MAX),
                    );
                if let Some(unit) = &config.unit {
                    sensor = sensor.with_unit(unit.as_str());
                }
                Box::new(sensor)
            }
            SensorKind::Vibration => {
                let mut sensor = VibrationSensor::new(config.id.as_str())
                    .with_window(config.window_size, config.calibration_offset)
                    .with_location(config.location.as_str())
                    .with_rms_threshold(
                        config
                            .threshold
                            .unwrap_or(VibrationSensor::DEFAULT_RMS_THRESHOLD),
                    );
                if let Some(hz) = config.frequency {
                    sensor = sensor.with_frequency(hz);
                }
                Box::new(sensor)
            }
            SensorKind::Humidity => {
                let mut sensor = HumiditySensor::new(config.id.as_str())
                    .with_window(config.window_size, config.calibration_offset)
                    .with_location(config.location.as_str())
                    .with_threshold(config.threshold.unwrap_or(HumiditySensor::DEFAULT_THRESHOLD));
                if let Some(env) = &config.environment {
                    sensor = sensor.with_environment(env.as_str());
                }
                Box::new(sensor)
            }
        }
    }
}
