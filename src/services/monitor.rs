//! Monitoring system shell
//!
//! Binds a name and version to the alert manager and tracks whether the
//! system is running.

use crate::alerts::AlertManager;

/// Version reported when none is given
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Top-level monitoring system
pub struct MonitoringSystem {
    name: String,
    version: String,
    manager: AlertManager,
    running: bool,
}

impl MonitoringSystem {
    /// Create a system with the default version
    pub fn new(name: impl Into<String>, manager: AlertManager) -> Self {
        Self::with_version(name, DEFAULT_VERSION, manager)
    }

    pub fn with_version(
        name: impl Into<String>,
        version: impl Into<String>,
        manager: AlertManager,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            manager,
            running: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark the system as started
    pub fn start(&mut self) {
        log::info!("Starting system {} v{}", self.name, self.version);
        self.running = true;
    }

    /// Mark the system as stopped
    pub fn stop(&mut self) {
        log::info!("Stopping system {}", self.name);
        self.running = false;
    }

    /// Current status report of the alert manager
    pub fn overall_status(&self) -> String {
        self.manager.generate_report()
    }

    pub fn manager(&self) -> &AlertManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut AlertManager {
        &mut self.manager
    }
}
