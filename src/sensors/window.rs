//! Calibrated rolling reading window
//!
//! Provides the validated window size and the FIFO buffer every sensor
//! keeps its readings in.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Maximum number of readings a sensor retains
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WindowSize(usize);

impl WindowSize {
    /// Default number of retained readings
    pub const DEFAULT: Self = Self(5);

    /// Create a new WindowSize with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidWindowSize` if `size` is zero
    pub fn new(size: usize) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidWindowSize(size));
        }
        Ok(Self(size))
    }

    /// Get the window size as a count
    #[inline]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WindowSize> for usize {
    fn from(size: WindowSize) -> Self {
        size.0
    }
}

/// Bounded buffer of calibrated readings
///
/// Every raw value has the calibration offset added before it is stored.
/// The buffer never holds more than `capacity` values; the oldest value is
/// evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingWindow {
    capacity: WindowSize,
    calibration_offset: f64,
    values: VecDeque<f64>,
}

impl ReadingWindow {
    /// Create an empty window
    pub fn new(capacity: WindowSize, calibration_offset: f64) -> Self {
        Self {
            capacity,
            calibration_offset,
            values: VecDeque::with_capacity(capacity.get() + 1),
        }
    }

    /// Store a calibrated reading, evicting the oldest if over capacity
    pub(crate) fn record(&mut self, raw: f64) {
        self.values.push_back(raw + self.calibration_offset);
        if self.values.len() > self.capacity.get() {
            self.values.pop_front();
        }
    }

    /// Arithmetic mean of the stored readings, 0.0 when empty
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let n = self.values.len() as f64;
        let mean = self.values.iter().sum::<f64>() / n;
        if mean.is_finite() {
            return mean;
        }
        // The plain sum overflowed; scale each term first
        self.values.iter().map(|v| v / n).sum()
    }

    /// Root-mean-square of the stored readings, 0.0 when empty
    pub fn rms(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let n = self.values.len() as f64;
        let mean_square = self.values.iter().map(|v| v * v).sum::<f64>() / n;
        if mean_square.is_finite() {
            return mean_square.sqrt();
        }
        // Squares overflowed; normalize by the largest magnitude
        let peak = self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let scaled = self.values.iter().map(|v| (v / peak).powi(2)).sum::<f64>() / n;
        peak * scaled.sqrt()
    }

    /// Stored readings, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Number of stored readings
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no reading has been stored yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of stored readings
    #[inline]
    pub fn capacity(&self) -> WindowSize {
        self.capacity
    }

    /// Offset added to every raw reading
    #[inline]
    pub fn calibration_offset(&self) -> f64 {
        self.calibration_offset
    }
}

/// Record a raw reading into a sensor's window
///
/// Non-finite values are dropped with a warning and never reach the buffer.
pub(crate) fn record_finite(window: &mut ReadingWindow, sensor_id: &str, value: f64) {
    if !value.is_finite() {
        log::warn!("Sensor {}: ignoring non-finite reading {}", sensor_id, value);
        return;
    }
    window.record(value);
}
