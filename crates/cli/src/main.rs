//! jsoncfg - inspect JSON configuration documents from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Set up logging to stderr.
//! - Run the selected command and translate failures into exit codes.
//!
//! Does NOT handle:
//! - Resolution, loading, or projection logic (see the `jsoncfg` library).
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so it can supply env-backed values.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `.env` if present. Missing files are ignored; other failures never echo
/// file contents.
fn load_dotenv() -> Result<(), String> {
    if dotenv_disabled() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(format!(
            "Failed to parse .env file at position {}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
            idx
        )),
        Err(dotenvy::Error::Io(e)) => Err(format!("Failed to read .env file: {}", e.kind())),
        Err(_) => Err("Failed to load .env file".to_string()),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "jsoncfg=debug" } else { "warn" })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
