//! Sensor abstraction
//!
//! Every sensor keeps a calibrated [`ReadingWindow`] and decides through its
//! own predicate whether it is alerting. The concrete variants only differ in
//! thresholds and in the statistic the predicate looks at.

mod factory;
mod humidity;
mod temperature;
mod vibration;
mod window;

pub use factory::SensorFactory;
pub use humidity::HumiditySensor;
pub use temperature::TemperatureSensor;
pub use vibration::VibrationSensor;
pub use window::{ReadingWindow, WindowSize};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location used when none is given
pub const DEFAULT_LOCATION: &str = "Unspecified";

/// Sensor variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Temperature,
    Vibration,
    Humidity,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Vibration => write!(f, "vibration"),
            Self::Humidity => write!(f, "humidity"),
        }
    }
}

/// Secondary statistic a sensor variant derives from its readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedReading {
    pub label: &'static str,
    pub value: f64,
}

impl fmt::Display for DerivedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.label, self.value)
    }
}

/// Sensor capability
///
/// Implementors provide identity, read-only access to their reading window
/// and the alert predicate; averaging and the status line are shared.
pub trait Sensor: Send + Sync {
    /// Unique sensor identifier
    fn id(&self) -> &str;

    /// Descriptive location, informational only
    fn location(&self) -> &str;

    /// Variant tag
    fn kind(&self) -> SensorKind;

    /// Calibrated readings
    fn window(&self) -> &ReadingWindow;

    /// Whether the current readings breach this sensor's thresholds
    fn is_alerting(&self) -> bool;

    /// Sensor kind and its defining parameter
    fn type_label(&self) -> String;

    /// Variant-specific secondary statistic, if any
    fn derived_reading(&self) -> Option<DerivedReading> {
        None
    }

    /// Add a raw reading
    ///
    /// Non-finite values are dropped with a warning so they can never
    /// poison the rolling average. Window size and calibration offset are
    /// fixed once the sensor is built.
    fn record(&mut self, value: f64);

    /// Rolling average of the calibrated readings
    fn average(&self) -> f64 {
        self.window().average()
    }

    /// One-line status summary used by reports
    fn status_line(&self) -> String {
        let state = if self.is_alerting() { "ALERT" } else { "NORMAL" };
        format!(
            "Sensor {} ({}): {} - Average: {:.2}",
            self.id(),
            self.type_label(),
            state,
            self.average()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_kind_display() {
        assert_eq!(SensorKind::Temperature.to_string(), "temperature");
        assert_eq!(SensorKind::Vibration.to_string(), "vibration");
        assert_eq!(SensorKind::Humidity.to_string(), "humidity");
    }

    #[test]
    fn test_record_ignores_non_finite() {
        let mut sensor = TemperatureSensor::new("TEMP_001");
        sensor.record(f64::NAN);
        sensor.record(f64::INFINITY);
        assert!(sensor.window().is_empty());
        sensor.record(20.0);
        assert_eq!(sensor.average(), 20.0);
    }

    #[test]
    fn test_window_fixed_after_construction() {
        let mut sensor: Box<dyn Sensor> = Box::new(
            HumiditySensor::new("HUM_001").with_window(WindowSize::new(1).unwrap(), 2.0),
        );
        for value in [10.0, 20.0, 30.0, f64::NAN] {
            sensor.record(value);
        }

        let window = sensor.window();
        assert_eq!(window.capacity().get(), 1);
        assert_eq!(window.calibration_offset(), 2.0);
        assert_eq!(window.len(), 1);
        assert_eq!(sensor.average(), 32.0);
    }

    #[test]
    fn test_status_line_format() {
        let mut sensor = HumiditySensor::new("HUM_001");
        sensor.record(60.0);
        assert_eq!(
            sensor.status_line(),
            "Sensor HUM_001 (Humidity in indoor): NORMAL - Average: 60.00"
        );

        sensor.record(120.0);
        assert_eq!(
            sensor.status_line(),
            "Sensor HUM_001 (Humidity in indoor): ALERT - Average: 90.00"
        );
    }

    #[test]
    fn test_derived_reading_display() {
        let mut sensor = TemperatureSensor::new("TEMP_001");
        sensor.record(100.0);
        let derived = sensor.derived_reading().unwrap();
        assert_eq!(derived.to_string(), "Fahrenheit: 212.00");
    }

    #[test]
    fn test_trait_objects() {
        let mut sensors: Vec<Box<dyn Sensor>> = vec![
            Box::new(TemperatureSensor::new("T")),
            Box::new(VibrationSensor::new("V")),
            Box::new(HumiditySensor::new("H")),
        ];
        for sensor in sensors.iter_mut() {
            sensor.record(1.0);
        }
        let kinds: Vec<_> = sensors.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![SensorKind::Temperature, SensorKind::Vibration, SensorKind::Humidity]
        );
        assert!(sensors.iter().all(|s| s.average() == 1.0));
    }
}
