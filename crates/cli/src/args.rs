//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate global options into a `SourceDescriptor` and `ViewOptions`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use jsoncfg::constants::{CONFIG_ENV_VAR, CONFIG_EXTENSION, DEFAULT_CONFIG_BASE_NAME};
use jsoncfg::{CasePolicy, SourceDescriptor, ViewOptions};

use crate::commands::vault::VaultCommand;

#[derive(Parser)]
#[command(name = "jsoncfg")]
#[command(about = "Inspect JSON configuration documents and vault containers", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jsoncfg resolve --candidates\n  jsoncfg --section database get host\n  jsoncfg --upper dump --prefix DB\n  jsoncfg vault init --key \"$APP_VAULT_KEY\"\n"
)]
pub struct Cli {
    /// Environment variable naming the configuration file
    #[arg(long, global = true, default_value = CONFIG_ENV_VAR, value_name = "NAME")]
    pub env_var: String,

    /// Extension appended to configuration base names
    #[arg(long, global = true, default_value = CONFIG_EXTENSION)]
    pub extension: String,

    /// Base name searched when the env variable does not resolve
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_BASE_NAME)]
    pub default_name: String,

    /// Dotted section to narrow the document to (e.g. database.primary)
    #[arg(short, long, global = true)]
    pub section: Option<String>,

    /// Uppercase every key on load and lookup
    #[arg(long, global = true)]
    pub upper: bool,

    /// Log resolution and loading details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(&self.env_var, &self.extension, &self.default_name)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            case: CasePolicy::from_uppercase(self.upper),
            section: self.section.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configuration file that would be loaded
    Resolve {
        /// List every candidate path in search order instead
        #[arg(long)]
        candidates: bool,
    },

    /// Print one field as JSON
    Get {
        /// Field name (case-converted with --upper)
        key: String,

        /// JSON value printed when the field is absent
        #[arg(short, long, value_name = "JSON")]
        default: Option<String>,
    },

    /// Print all public fields as a JSON object
    Dump {
        /// Only include fields whose names start with this prefix
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Manage the vault container
    Vault {
        #[command(subcommand)]
        command: VaultCommand,
    },
}
