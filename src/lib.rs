//! sensorwatch - sensor monitoring and alerting library
//!
//! This library ingests scalar sensor readings, keeps a calibrated rolling
//! window per sensor, evaluates sensor-specific alert conditions and
//! dispatches alert messages to pluggable notification channels.
//!
//! # Modules
//!
//! - [`alerts`]: Alert records, notifiers and the alert manager
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`error`]: Error types
//! - [`sensors`]: Sensor abstraction and variants
//! - [`services`]: Monitoring system lifecycle

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod sensors;
pub mod services;

pub use error::{AppError, Result};
