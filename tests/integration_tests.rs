//! End-to-end tests through the public library API

use sensorwatch::alerts::{
    format_phone_number, AlertManager, Delivery, EmailNotifier, Notifier, Severity, SmsNotifier,
    WebhookNotifier,
};
use sensorwatch::commands::run::process_readings;
use sensorwatch::config::{Config, ConfigFile, NotifierConfig};
use sensorwatch::sensors::SensorFactory;
use sensorwatch::services::MonitoringSystem;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

struct Collector {
    sent: Arc<Mutex<Vec<String>>>,
}

impl Notifier for Collector {
    fn send(&self, message: &str) -> Delivery {
        self.sent.lock().unwrap().push(message.to_string());
        Delivery::Sent {
            channel: "collector".to_string(),
            line: message.to_string(),
        }
    }

    fn name(&self) -> &str {
        "collector"
    }
}

fn manager_with_collector() -> (AlertManager, Arc<Mutex<Vec<String>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let mut manager = AlertManager::default();
    manager
        .add_sensor(Box::new(SensorFactory::temperature(
            "TEMP_001",
            75.0,
            "Server room",
        )))
        .unwrap();
    manager
        .add_sensor(Box::new(SensorFactory::vibration(
            "VIB_001",
            2.0,
            "Main motor",
        )))
        .unwrap();
    manager
        .add_sensor(Box::new(SensorFactory::humidity("HUM_001", 80.0, "Warehouse")))
        .unwrap();
    manager.add_notifier(Box::new(Collector {
        sent: Arc::clone(&sent),
    }));
    (manager, sent)
}

#[test]
fn test_demo_scenario_alerts_only_on_vibration() {
    let (mut manager, sent) = manager_with_collector();

    manager.record_reading("TEMP_001", 45.0).unwrap();
    manager.record_reading("VIB_001", 1.0).unwrap();
    manager.record_reading("HUM_001", 60.0).unwrap();
    assert!(manager.evaluate_and_notify().is_empty());

    manager.record_reading("TEMP_001", 95.0).unwrap();
    manager.record_reading("VIB_001", 3.5).unwrap();
    manager.record_reading("HUM_001", 90.0).unwrap();

    let raised = manager.evaluate_and_notify();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].sensor_id(), "VIB_001");
    assert_eq!(raised[0].severity(), Severity::Warning);
    assert_eq!(
        *sent.lock().unwrap(),
        vec!["ALERT: Sensor VIB_001 at threshold (avg=2.25)"]
    );

    let temp = manager.sensor("TEMP_001").unwrap();
    assert_eq!(temp.average(), 70.0);
    assert_eq!(temp.derived_reading().unwrap().value, 158.0);
}

#[test]
fn test_report_lists_recent_alerts() {
    let (mut manager, _sent) = manager_with_collector();
    for _ in 0..5 {
        manager.record_reading("HUM_001", 99.0).unwrap();
    }
    for _ in 0..7 {
        manager.evaluate_and_notify();
    }

    let report = manager.generate_report();
    assert!(report.contains("Recorded alerts: 7\n"));
    let recent = report.split("Recent alerts:\n").nth(1).unwrap();
    assert_eq!(recent.lines().count(), 5);
    assert!(recent.lines().all(|l| l.contains("HUM_001")));

    assert_eq!(manager.clear_history(), 7);
    assert!(!manager.generate_report().contains("Recent alerts"));
}

#[test]
fn test_process_readings_from_text() {
    let (mut manager, sent) = manager_with_collector();
    let input = "\
# cycle one
TEMP_001 40
HUM_001 50
---
TEMP_001 200
TEMP_001 200
TEMP_001 200
TEMP_001 200
bogus line
UNKNOWN_9 1.0
";
    let cycles = process_readings(&mut manager, Cursor::new(input)).unwrap();
    assert_eq!(cycles, 2);

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("ALERT: Sensor TEMP_001"));
}

#[test]
fn test_notifier_validation() {
    assert!(EmailNotifier::new("admin@company.com").send("x").is_sent());
    assert!(!EmailNotifier::new("admin@company").send("x").is_sent());

    assert!(WebhookNotifier::new("http://example.com").send("x").is_sent());
    assert!(WebhookNotifier::new("https://example.com").send("x").is_sent());
    assert!(!WebhookNotifier::new("ftp://example.com").send("x").is_sent());

    let sms = SmsNotifier::new("555-123-4567").send("hello");
    assert_eq!(sms.to_string(), "[SMS via Twilio to +1-555-123-4567] hello");
    assert_eq!(format_phone_number("12345"), "12345");
}

#[test]
fn test_config_file_round_trip_builds_manager() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sensorwatch.toml");

    let mut config = Config::default();
    config.notifiers.push(NotifierConfig::Console { stderr: true });
    ConfigFile::save(&config, &path).unwrap();

    let loaded = ConfigFile::load(&path).unwrap();
    assert_eq!(loaded, config);

    let manager = loaded.build_manager().unwrap();
    assert_eq!(manager.sensor_count(), 3);
    assert_eq!(manager.notifier_count(), 4);
}

#[test]
fn test_monitoring_system_lifecycle() {
    let (manager, _sent) = manager_with_collector();
    let mut system = MonitoringSystem::new("MonitorPro", manager);

    assert!(!system.is_running());
    system.start();
    assert!(system.is_running());
    assert!(system.overall_status().starts_with("=== SYSTEM REPORT ==="));
    system.stop();
    assert!(!system.is_running());
    assert_eq!(system.version(), "1.0.0");
}
