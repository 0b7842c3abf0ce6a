//! # Tally CLI Application
//!
//! Terminal front end for the calc_core engine.
//!
//! - With no subcommand, runs the interactive numbered menu.
//! - `eval` evaluates a single operation from the command line and exits
//!   with status 1 if it fails.
//!
//! ```text
//! calc_cli
//! calc_cli --degrees eval tan 45
//! calc_cli --json eval 2 ^ 10
//! ```

mod command;
mod config;
mod logging;
mod menu;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_core::{OutputFormat, Session, Settings};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::command::parse_calculation;
use crate::config::{load_settings, Overrides};
use crate::logging::init_logging;
use crate::menu::Menu;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Interactive command-line calculator")]
struct Cli {
    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat trig angles as degrees unless told otherwise
    #[arg(long)]
    degrees: bool,

    /// Print one-shot results as JSON
    #[arg(long)]
    json: bool,

    /// Log filter directive, e.g. "debug" or "calc_core=trace"
    #[arg(long, env = "CALC_LOG", value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one operation: `2 ^ 10`, `sqrt 16`, `log 100 10`, `tan 45 deg`
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match init(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Fatal error: {e:#}");
            eprintln!("Calculator could not start.");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Command::Eval { tokens }) => {
            let stdout = io::stdout();
            let stderr = io::stderr();
            run_eval(&tokens, settings, &mut stdout.lock(), &mut stderr.lock())
        }
        None => run_interactive(settings),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init(cli: &Cli) -> Result<Settings> {
    let overrides = Overrides {
        degrees: cli.degrees,
        json: cli.json,
        log_level: cli.log_level.clone(),
    };
    let settings = load_settings(cli.config.as_deref(), &overrides)?;
    init_logging(&settings.log_level)?;
    debug!(?settings, "settings loaded");
    Ok(settings)
}

fn run_interactive(settings: Settings) -> Result<bool> {
    info!("starting interactive session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), Session::new(settings));
    menu.run().context("Terminal I/O failed")?;

    let session = menu.into_session();
    debug!(entries = session.history().len(), "interactive session ended");
    Ok(true)
}

/// Evaluate one operation. Returns `Ok(false)` when the arguments are invalid
/// or the calculation fails; the process then exits with status 1.
fn run_eval<W: Write, E: Write>(
    tokens: &[String],
    settings: Settings,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let output = settings.output;
    let calculation = match parse_calculation(tokens, settings.angle_unit) {
        Ok(calculation) => calculation,
        Err(e) => {
            writeln!(err, "{e}")?;
            return Ok(false);
        }
    };

    let mut session = Session::new(settings);
    let outcome = session.evaluate(&calculation);

    match output {
        OutputFormat::Text => writeln!(out, "Result: {}", outcome.display)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize result")?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(outcome.is_ok())
}
