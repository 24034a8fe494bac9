//! sensorwatch - sensor monitoring and alerting tool
//!
//! A command-line harness around the alerting engine: demo scenario,
//! batch evaluation of readings, interactive control panel and config
//! management.

use clap::Parser;
use sensorwatch::cli::args::{generate_completions, Cli, Commands};
use sensorwatch::commands::{run_config, run_dashboard, run_demo, run_readings};
use sensorwatch::config::{Config, ConfigBuilder};
use sensorwatch::error::{AppError, ConfigError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Config is loaded first so its log level can seed the logger
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .map(|b| b.with_log_level(cli.log_level.clone()).build());

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        config
            .as_ref()
            .ok()
            .and_then(|c| c.system.level_filter())
            .unwrap_or(log::LevelFilter::Warn)
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();

    let result = config
        .map_err(AppError::from)
        .and_then(|config| run(&cli, &config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    if !config.system.validate() {
        log::warn!("System configuration failed validation; run 'sensorwatch config validate'");
    }

    match &cli.command {
        Commands::Demo(args) => run_demo(args, config),

        Commands::Run(args) => run_readings(args, config, cli.format),

        Commands::Dashboard(args) => run_dashboard(args, config),

        Commands::Config(args) => run_config(&args.command, config, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Create one with 'sensorwatch config init --path <FILE>'.");
        }
        AppError::Config(ConfigError::TomlError(_)) => {
            eprintln!();
            eprintln!("Hint: Compare against the output of 'sensorwatch config show'.");
        }
        _ => {}
    }
}
