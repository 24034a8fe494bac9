//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod config;
pub mod dashboard;
pub mod demo;
pub mod run;

pub use config::run_config;
pub use dashboard::run_dashboard;
pub use demo::run_demo;
pub use run::run_readings;
