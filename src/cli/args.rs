//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Sensor monitoring and alerting engine
///
/// Feed sensor readings, evaluate alert thresholds and dispatch alerts to
/// email, webhook and SMS notifiers.
#[derive(Parser, Debug)]
#[command(name = "sensorwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SENSORWATCH_CONFIG")]
    pub config: Option<String>,

    /// Override the configured log level (DEBUG, INFO, WARNING, ERROR)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in demonstration scenario
    Demo(DemoArgs),

    /// Evaluate readings from a file or stdin
    Run(RunArgs),

    /// Open the interactive control panel
    Dashboard(DashboardArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the demo command
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// System name shown on the dashboard
    #[arg(long, default_value = "MonitorPro")]
    pub name: String,
}

/// Arguments for the run command
///
/// Each input line is `SENSOR_ID VALUE`. A line containing only `---`
/// closes a polling cycle; the last cycle is evaluated at end of input.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Echo alerts to the terminal as they are dispatched
    #[arg(long)]
    pub echo: bool,
}

/// Arguments for the dashboard command
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// System name shown on the dashboard
    #[arg(long, default_value = "MonitorPro")]
    pub name: String,
}

/// Arguments for config commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration
    Init {
        /// Destination path (defaults to the user config directory)
        #[arg(long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Check the effective configuration
    Validate,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Table,
    /// JSON lines for machine parsing
    Json,
    /// Comma-delimited lines
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
