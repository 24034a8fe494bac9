//! Services layer
//!
//! Long-lived objects that compose the alerting core.

pub mod monitor;

pub use monitor::MonitoringSystem;
