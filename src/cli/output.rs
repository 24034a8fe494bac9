//! Output formatting utilities
//!
//! Provides report, JSON and compact output plus the control panel text.

use crate::alerts::AlertRecord;
use crate::cli::args::OutputFormat;
use crate::services::MonitoringSystem;
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact string
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Report plus the alert history behind it
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub report: String,
    pub alerts: Vec<AlertRecord>,
}

impl RunSummary {
    pub fn from_system(system: &MonitoringSystem) -> Self {
        Self {
            report: system.overall_status(),
            alerts: system.manager().history().to_vec(),
        }
    }
}

impl TableDisplay for RunSummary {
    fn to_table(&self) -> String {
        self.report.clone()
    }

    /// One CSV line per alert
    fn to_compact(&self) -> String {
        self.alerts
            .iter()
            .map(|a| a.to_csv())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Control panel banner with the current report
pub fn render_dashboard(system: &MonitoringSystem) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n  CONTROL PANEL - {}\n  Version: {}\n{rule}\n{}{rule}",
        system.name(),
        system.version(),
        system.overall_status(),
    )
}

/// Interactive menu entries
pub fn render_menu() -> String {
    [
        "Available commands:",
        "1. View status",
        "2. Generate report",
        "3. Clear history",
        "4. Record reading",
        "5. Evaluate sensors",
        "6. Exit",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertManager, Severity};

    fn summary() -> RunSummary {
        RunSummary {
            report: "=== SYSTEM REPORT ===\nActive sensors: 0\n".to_string(),
            alerts: vec![AlertRecord::new("T1", "ALERT: hot", Severity::Warning, 90.0)],
        }
    }

    #[test]
    fn test_write_table() {
        let mut out = Vec::new();
        write_output(&mut out, &summary(), OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== SYSTEM REPORT ==="));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_output(&mut out, &summary(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["alerts"][0]["sensor_id"], "T1");
        assert_eq!(value["alerts"][0]["severity"], "WARNING");
    }

    #[test]
    fn test_write_compact() {
        let mut out = Vec::new();
        write_output(&mut out, &summary(), OutputFormat::Compact).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_end().ends_with(",T1,WARNING,90.0,'ALERT: hot'"));
    }

    #[test]
    fn test_render_dashboard() {
        let system = MonitoringSystem::with_version("MonitorPro", "2.0.0", AlertManager::default());
        let panel = render_dashboard(&system);
        assert!(panel.contains("  CONTROL PANEL - MonitorPro\n"));
        assert!(panel.contains("  Version: 2.0.0\n"));
        assert!(panel.contains("=== SYSTEM REPORT ==="));
        assert!(panel.ends_with(&"=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_render_menu() {
        let menu = render_menu();
        assert_eq!(menu.lines().count(), 7);
        assert!(menu.ends_with("6. Exit"));
    }
}
