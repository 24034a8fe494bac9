//! Vibration sensor
//!
//! The predicate looks at the RMS of the whole window rather than at the
//! plain average, so alternating positive and negative readings still alert.

use super::window::record_finite;
use super::{DerivedReading, ReadingWindow, Sensor, SensorKind, WindowSize, DEFAULT_LOCATION};

/// Vibration sensor with an RMS threshold
#[derive(Debug, Clone)]
pub struct VibrationSensor {
    id: String,
    location: String,
    window: ReadingWindow,
    rms_threshold: f64,
    frequency: u32,
}

impl VibrationSensor {
    /// Default RMS threshold
    pub const DEFAULT_RMS_THRESHOLD: f64 = 2.5;
    /// Default sampling frequency in Hz
    pub const DEFAULT_FREQUENCY: u32 = 1000;

    /// Create a sensor with default threshold, window and no calibration
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: DEFAULT_LOCATION.to_string(),
            window: ReadingWindow::new(WindowSize::default(), 0.0),
            rms_threshold: Self::DEFAULT_RMS_THRESHOLD,
            frequency: Self::DEFAULT_FREQUENCY,
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

    pub fn with_rms_threshold(mut self, threshold: f64) -> Self {
        self.rms_threshold = threshold;
        self
    }

    pub fn with_frequency(mut self, hz: u32) -> Self {
        self.frequency = hz;
        self
    }

    pub fn rms_threshold(&self) -> f64 {
        self.rms_threshold
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Root-mean-square of the calibrated readings
    pub fn rms(&self) -> f64 {
        self.window.rms()
    }
}

impl Sensor for VibrationSensor {
    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Vibration
    }

    fn window(&self) -> &ReadingWindow {
        &self.window
    }

    fn record(&mut self, value: f64) {
        record_finite(&mut self.window, &self.id, value);
    }

    fn is_alerting(&self) -> bool {
        self.rms().abs() >= self.rms_threshold
    }

    fn type_label(&self) -> String {
        format!("Vibration @ {}Hz", self.frequency)
    }

    fn derived_reading(&self) -> Option<DerivedReading> {
        Some(DerivedReading {
            label: "RMS",
            value: self.rms(),
        })
    }
}
