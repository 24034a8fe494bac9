//! Demo command implementation
//!
//! Walks a three-sensor deployment through a normal and an alerting
//! polling cycle.

use crate::alerts::{AlertManager, EmailNotifier, SmsNotifier, WebhookNotifier};
use crate::cli::args::DemoArgs;
use crate::cli::output::render_dashboard;
use crate::config::Config;
use crate::error::Result;
use crate::sensors::SensorFactory;
use crate::services::MonitoringSystem;

use std::io::{self, Write};

/// Execute the demo command
pub fn run_demo(args: &DemoArgs, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    demo(args, config, stdout.lock())
}

/// Run the scenario, writing progress to `out`
pub fn demo<W: Write>(args: &DemoArgs, config: &Config, mut out: W) -> Result<()> {
    writeln!(out, "Starting monitoring system demo")?;

    let mut manager = AlertManager::new(config.system.clone());
    manager.add_notifier(Box::new(EmailNotifier::with_host(
        "admin@company.com",
        "smtp.company.com",
    )));
    manager.add_notifier(Box::new(WebhookNotifier::new(
        "https://api.company.com/alerts",
    )));
    manager.add_notifier(Box::new(SmsNotifier::with_provider("555-123-4567", "Twilio")));

    manager.add_sensor(Box::new(SensorFactory::temperature(
        "TEMP_001",
        75.0,
        "Server room",
    )))?;
    manager.add_sensor(Box::new(SensorFactory::vibration(
        "VIB_001",
        2.0,
        "Main motor",
    )))?;
    manager.add_sensor(Box::new(SensorFactory::humidity(
        "HUM_001", 80.0, "Warehouse",
    )))?;

    let mut system = MonitoringSystem::with_version(args.name.as_str(), "2.0.0", manager);
    system.start();
    writeln!(out, "{}", render_dashboard(&system))?;

    writeln!(out, "\nSimulating sensor readings...")?;
    feed(&mut system, &[("TEMP_001", 25.0), ("VIB_001", 1.0), ("HUM_001", 60.0)])?;
    writeln!(out, "\nFirst evaluation (normal values):")?;
    evaluate(&mut system, &mut out)?;

    writeln!(out, "\nSimulating alert conditions...")?;
    feed(&mut system, &[("TEMP_001", 85.0), ("VIB_001", 3.5), ("HUM_001", 90.0)])?;
    writeln!(out, "\nSecond evaluation (alert values):")?;
    evaluate(&mut system, &mut out)?;

    writeln!(out, "{}", render_dashboard(&system))?;

    writeln!(out, "\nDerived sensor values:")?;
    for sensor in system.manager().sensors() {
        if let Some(derived) = sensor.derived_reading() {
            writeln!(out, "  {} {}", sensor.id(), derived)?;
        }
    }

    writeln!(out, "\nClearing history...")?;
    let removed = system.manager_mut().clear_history();
    writeln!(out, "History cleared: {} alerts removed", removed)?;

    system.stop();
    writeln!(out, "\nDemo complete")?;
    Ok(())
}

fn feed(system: &mut MonitoringSystem, readings: &[(&str, f64)]) -> Result<()> {
    for (sensor_id, value) in readings {
        system.manager_mut().record_reading(sensor_id, *value)?;
    }
    Ok(())
}

fn evaluate<W: Write>(system: &mut MonitoringSystem, out: &mut W) -> Result<()> {
    let raised = system.manager_mut().evaluate_and_notify();
    if raised.is_empty() {
        writeln!(out, "  No alerts")?;
    }
    for record in &raised {
        writeln!(out, "  {}", record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scenario() {
        let args = DemoArgs {
            name: "MonitorPro".to_string(),
        };
        let mut out = Vec::new();
        demo(&args, &Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let first = text.split("First evaluation").nth(1).unwrap();
        let first = first.split("Simulating alert conditions").next().unwrap();
        assert!(first.contains("No alerts"));

        // After the second cycle: temperature avg 55.0, vibration RMS ~2.57, humidity avg 75.0
        let second = text.split("Second evaluation").nth(1).unwrap();
        let second = second.split("CONTROL PANEL").next().unwrap();
        assert!(!second.contains("TEMP_001"));
        assert!(second.contains("VIB_001"));
        assert!(!second.contains("HUM_001"));

        assert!(text.contains("Recorded alerts: 1"));
        assert!(text.contains("TEMP_001 Fahrenheit: 131.00"));
        assert!(text.contains("History cleared: 1 alerts removed"));
        assert!(text.ends_with("Demo complete\n"));
    }
}
