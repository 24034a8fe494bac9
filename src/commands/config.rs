//! Config command implementation
//!
//! Writes, prints and checks the configuration file.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, ConfigFile};
use crate::error::{ConfigError, Result};

use std::path::PathBuf;

/// Execute config commands
pub fn run_config(command: &ConfigCommands, config: &Config, format: OutputFormat) -> Result<()> {
    match command {
        ConfigCommands::Init { path, force } => run_config_init(path.as_deref(), *force),
        ConfigCommands::Show => run_config_show(config, format),
        ConfigCommands::Validate => run_config_validate(config),
    }
}

fn run_config_init(path: Option<&str>, force: bool) -> Result<()> {
    let path = path.map(PathBuf::from).unwrap_or_else(ConfigFile::user_path);

    if path.exists() && !force {
        println!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    ConfigFile::save(&Config::default(), &path)?;
    println!("Saved default configuration to: {}", path.display());
    Ok(())
}

fn run_config_show(config: &Config, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config).map_err(ConfigError::from)?,
        OutputFormat::Table | OutputFormat::Compact => {
            toml::to_string_pretty(config).map_err(ConfigError::from)?
        }
    };
    println!("{}", text);
    Ok(())
}

fn run_config_validate(config: &Config) -> Result<()> {
    let problems = validation_problems(config);
    if problems.is_empty() {
        println!(
            "Configuration is valid ({} sensors, {} notifiers)",
            config.sensors.len(),
            config.notifiers.len()
        );
        return Ok(());
    }

    for problem in &problems {
        println!("- {}", problem);
    }
    Err(ConfigError::InvalidValue {
        key: "system".to_string(),
        message: format!("{} problem(s) found", problems.len()),
    }
    .into())
}

/// Describe every configuration problem
///
/// Covers the system settings and sensor id uniqueness.
pub fn validation_problems(config: &Config) -> Vec<String> {
    let mut problems = Vec::new();
    let system = &config.system;

    if system.polling_interval_seconds == 0 {
        problems.push("polling_interval_seconds must be greater than 0".to_string());
    }
    if system.max_alerts_per_hour == 0 {
        problems.push("max_alerts_per_hour must be greater than 0".to_string());
    }
    if system.severity().is_none() {
        problems.push(format!(
            "log_level '{}' must be one of DEBUG, INFO, WARNING, ERROR",
            system.log_level
        ));
    }

    for (i, sensor) in config.sensors.iter().enumerate() {
        if config.sensors[..i].iter().any(|s| s.id == sensor.id) {
            problems.push(format!("sensor id '{}' is defined more than once", sensor.id));
        }
    }

    problems
}
