//! Run command implementation
//!
//! Feeds readings from a file or stdin into the configured sensors and
//! evaluates them cycle by cycle.

use crate::alerts::{AlertManager, ConsoleNotifier};
use crate::cli::args::{OutputFormat, RunArgs};
use crate::cli::output::{print_output, RunSummary};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::MonitoringSystem;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Line that closes a polling cycle
pub const CYCLE_SEPARATOR: &str = "---";

/// Execute the run command
pub fn run_readings(args: &RunArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let mut manager = config.build_manager()?;
    if args.echo {
        manager.add_notifier(Box::new(ConsoleNotifier::stdout()));
    }

    let mut system = MonitoringSystem::new("sensorwatch", manager);
    system.start();

    let cycles = match &args.input {
        Some(path) => {
            let file = File::open(path)?;
            process_readings(system.manager_mut(), BufReader::new(file))?
        }
        None => process_readings(system.manager_mut(), io::stdin().lock())?,
    };
    log::info!("Processed {} evaluation cycles", cycles);

    system.stop();
    print_output(&RunSummary::from_system(&system), format)?;
    Ok(())
}

/// Feed every reading line to the manager, evaluating at each separator
///
/// Malformed lines and unknown sensors are skipped with a warning. A final
/// evaluation runs if readings arrived after the last separator. Returns the
/// number of evaluation cycles.
pub fn process_readings<R: BufRead>(manager: &mut AlertManager, reader: R) -> Result<usize> {
    let mut cycles = 0;
    let mut pending = false;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line == CYCLE_SEPARATOR {
            manager.evaluate_and_notify();
            cycles += 1;
            pending = false;
            continue;
        }

        let recorded = parse_reading(line)
            .and_then(|(sensor_id, value)| manager.record_reading(sensor_id, value));
        match recorded {
            Ok(()) => pending = true,
            Err(e) => log::warn!("Line {}: {}", number + 1, e),
        }
    }

    if pending {
        manager.evaluate_and_notify();
        cycles += 1;
    }

    Ok(cycles)
}

/// Parse a `SENSOR_ID VALUE` line
pub fn parse_reading(line: &str) -> Result<(&str, f64)> {
    let mut parts = line.split_whitespace();
    let (Some(sensor_id), Some(raw), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::InvalidInput(format!(
            "expected 'SENSOR_ID VALUE', got '{}'",
            line
        )));
    };

    let value: f64 = raw
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a number", raw)))?;

    Ok((sensor_id, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SensorConfig, SystemConfig};
    use crate::sensors::{SensorKind, WindowSize};
    use std::io::Cursor;

    fn manager() -> AlertManager {
        let mut sensor = SensorConfig::new("TEMP_001", SensorKind::Temperature);
        sensor.window_size = WindowSize::new(1).unwrap();
        let config = Config {
            system: SystemConfig::default(),
            sensors: vec![sensor],
            notifiers: Vec::new(),
        };
        config.build_manager().unwrap()
    }

    #[test]
    fn test_parse_reading() {
        assert_eq!(parse_reading("TEMP_001 85.5").unwrap(), ("TEMP_001", 85.5));
        assert_eq!(parse_reading("  HUM_001\t-3 ").unwrap(), ("HUM_001", -3.0));
        assert!(parse_reading("TEMP_001").is_err());
        assert!(parse_reading("TEMP_001 hot").is_err());
        assert!(parse_reading("TEMP_001 1 2").is_err());
    }

    #[test]
    fn test_process_readings_cycles() {
        let mut manager = manager();
        let input = "TEMP_001 25\n---\nTEMP_001 85\n---\n# comment\nTEMP_001 90\n";

        let cycles = process_readings(&mut manager, Cursor::new(input)).unwrap();
        assert_eq!(cycles, 3);
        assert_eq!(manager.history().len(), 2);
        assert_eq!(manager.history()[1].measured_value(), 90.0);
    }

    #[test]
    fn test_process_readings_skips_bad_lines() {
        let mut manager = manager();
        let input = "garbage\nHUM_404 50\nTEMP_001 nan\nTEMP_001 95\n";

        let cycles = process_readings(&mut manager, Cursor::new(input)).unwrap();
        assert_eq!(cycles, 1);
        assert_eq!(manager.history().len(), 1);
    }

    #[test]
    fn test_process_readings_empty_input() {
        let mut manager = manager();
        let cycles = process_readings(&mut manager, Cursor::new("")).unwrap();
        assert_eq!(cycles, 0);
        assert!(manager.history().is_empty());
    }
}
