//! Temperature sensor
//!
//! Alerts when the rolling average leaves the `[min, max]` band, bounds
//! included as alerting.

use super::window::record_finite;
use super::{DerivedReading, ReadingWindow, Sensor, SensorKind, WindowSize, DEFAULT_LOCATION};

/// Temperature sensor with an upper and lower threshold
#[derive(Debug, Clone)]
pub struct TemperatureSensor {
    id: String,
    location: String,
    window: ReadingWindow,
    max_threshold: f64,
    min_threshold: f64,
    unit: String,
}

impl TemperatureSensor {
    /// Default upper threshold
    pub const DEFAULT_MAX: f64 = 80.0;
    /// Default lower threshold
    pub const DEFAULT_MIN: f64 = -10.0;

    /// Create a sensor with default thresholds, window and no calibration
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: DEFAULT_LOCATION.to_string(),
            window: ReadingWindow::new(WindowSize::default(), 0.0),
            max_threshold: Self::DEFAULT_MAX,
            min_threshold: Self::DEFAULT_MIN,
            unit: "C".to_string(),
        }
    }

    /// Set the reading window and calibration offset
    ///
    /// Only meaningful before the first reading; any stored reading is
    /// discarded.
    pub fn with_window(mut self, size: WindowSize, calibration_offset: f64) -> Self {
        self.window = ReadingWindow::new(size, calibration_offset);
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the alert band
    pub fn with_thresholds(mut self, min: f64, max: f64) -> Self {
        self.min_threshold = min;
        self.max_threshold = max;
        self
    }

    /// Set the display unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn max_threshold(&self) -> f64 {
        self.max_threshold
    }

    pub fn min_threshold(&self) -> f64 {
        self.min_threshold
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Current average converted from Celsius to Fahrenheit
    pub fn fahrenheit(&self) -> f64 {
        self.average() * 9.0 / 5.0 + 32.0
    }
}

impl Sensor for TemperatureSensor {
    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn window(&self) -> &ReadingWindow {
        &self.window
    }

    fn record(&mut self, value: f64) {
        record_finite(&mut self.window, &self.id, value);
    }

    fn is_alerting(&self) -> bool {
        let avg = self.average();
        avg >= self.max_threshold || avg <= self.min_threshold
    }

    fn type_label(&self) -> String {
        format!("Temperature ({})", self.unit)
    }

    fn derived_reading(&self) -> Option<DerivedReading> {
        Some(DerivedReading {
            label: "Fahrenheit",
            value: self.fahrenheit(),
        })
    }
}
