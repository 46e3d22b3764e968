//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handlers.
//! - Turn global options into the descriptor and view options commands share.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup or exit codes (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let descriptor = cli.descriptor();
    let options = cli.view_options();

    match cli.command {
        Commands::Resolve { candidates } => commands::resolve::run(&descriptor, candidates),
        Commands::Get { key, default } => {
            commands::get::run(&descriptor, options, &key, default.as_deref())
        }
        Commands::Dump { prefix } => commands::dump::run(&descriptor, options, prefix.as_deref()),
        Commands::Vault { command } => commands::vault::run(command),
    }
}
