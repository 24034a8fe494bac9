//! Dashboard command implementation
//!
//! Interactive control panel driven by a numbered menu. Invalid input never
//! ends the session; the user is asked to try again.

use crate::cli::args::DashboardArgs;
use crate::cli::output::{render_dashboard, render_menu};
use crate::commands::run::parse_reading;
use crate::config::Config;
use crate::error::Result;
use crate::services::MonitoringSystem;

use std::io::{self, BufRead, Write};

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewStatus,
    Report,
    ClearHistory,
    RecordReading,
    Evaluate,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewStatus),
            "2" => Some(Self::Report),
            "3" => Some(Self::ClearHistory),
            "4" => Some(Self::RecordReading),
            "5" => Some(Self::Evaluate),
            "6" | "q" | "quit" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Execute the dashboard command
pub fn run_dashboard(args: &DashboardArgs, config: &Config) -> Result<()> {
    let manager = config.build_manager()?;
    let mut system = MonitoringSystem::new(args.name.as_str(), manager);
    system.start();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = control_loop(&mut system, stdin.lock(), stdout.lock());

    system.stop();
    result
}

/// Run the menu loop until exit or end of input
pub fn control_loop<R: BufRead, W: Write>(
    system: &mut MonitoringSystem,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{}", render_dashboard(system))?;

    loop {
        writeln!(out, "\n{}", render_menu())?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Invalid option '{}'. Try again.", line.trim())?;
            continue;
        };

        match choice {
            MenuChoice::ViewStatus => writeln!(out, "{}", render_dashboard(system))?,
            MenuChoice::Report => writeln!(out, "{}", system.overall_status())?,
            MenuChoice::ClearHistory => {
                let removed = system.manager_mut().clear_history();
                writeln!(out, "History cleared: {} alerts removed", removed)?;
            }
            MenuChoice::RecordReading => {
                write!(out, "Reading (SENSOR_ID VALUE): ")?;
                out.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                let recorded = parse_reading(&line).and_then(|(sensor_id, value)| {
                    system.manager_mut().record_reading(sensor_id, value)
                });
                match recorded {
                    Ok(()) => writeln!(out, "Reading recorded")?,
                    Err(e) => writeln!(out, "{}. Try again.", e)?,
                }
            }
            MenuChoice::Evaluate => {
                let raised = system.manager_mut().evaluate_and_notify();
                writeln!(out, "{} alert(s) raised", raised.len())?;
                for record in &raised {
                    writeln!(out, "  {}", record)?;
                }
            }
            MenuChoice::Exit => break,
        }
    }

    writeln!(out, "Goodbye")?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
