//! Humidity sensor

use super::window::record_finite;
use super::{DerivedReading, ReadingWindow, Sensor, SensorKind, WindowSize, DEFAULT_LOCATION};

/// Relative humidity sensor with a single upper threshold
#[derive(Debug, Clone)]
pub struct HumiditySensor {
    id: String,
    location: String,
    window: ReadingWindow,
    humidity_threshold: f64,
    environment: String,
}

impl HumiditySensor {
    /// Default threshold in percent
    pub const DEFAULT_THRESHOLD: f64 = 85.0;

    /// Create a sensor with default threshold, window and no calibration
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: DEFAULT_LOCATION.to_string(),
            window: ReadingWindow::new(WindowSize::default(), 0.0),
            humidity_threshold: Self::DEFAULT_THRESHOLD,
            environment: "indoor".to_string(),
        }
    }

    /// Set the reading window and calibration offset
    pub fn with_window(mut self, size: WindowSize, calibration_offset: f64) -> Self {
        self.window = ReadingWindow::new(size, calibration_offset);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.humidity_threshold = threshold;
        self
    }

    /// Set the environment type, e.g. "indoor" or "outdoor"
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn threshold(&self) -> f64 {
        self.humidity_threshold
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Approximate dew point derived from the current average
    ///
    /// Uses the `avg - (100 - avg) / 5` rule of thumb; 0.0 when the average
    /// is not positive.
    pub fn dew_point(&self) -> f64 {
        let avg = self.average();
        if avg > 0.0 {
            avg - (100.0 - avg) / 5.0
        } else {
            0.0
        }
    }
}

impl Sensor for HumiditySensor {
    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Humidity
    }

    fn window(&self) -> &ReadingWindow {
        &self.window
    }

    fn record(&mut self, value: f64) {
        record_finite(&mut self.window, &self.id, value);
    }

    fn is_alerting(&self) -> bool {
        self.average() >= self.humidity_threshold
    }

    fn type_label(&self) -> String {
        format!("Humidity in {}", self.environment)
    }

    fn derived_reading(&self) -> Option<DerivedReading> {
        Some(DerivedReading {
            label: "Dew point",
            value: self.dew_point(),
        })
    }
}
