//! Vault container commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jsoncfg::constants::{VAULT_ENV_VAR, VAULT_KEY_ENV_VAR};
use jsoncfg::{SourceDescriptor, VaultContainer, env_var_or_none};
use secrecy::SecretString;

#[derive(Subcommand)]
pub enum VaultCommand {
    /// Create the vault container (and parent directories) if missing
    Init(VaultArgs),

    /// Encrypt a JSON document into the vault container
    Seal {
        #[command(flatten)]
        vault: VaultArgs,

        /// JSON document to seal
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Decrypt the vault container and print its document
    Show(VaultArgs),
}

#[derive(Args)]
pub struct VaultArgs {
    /// Vault key (falls back to APP_VAULT_KEY)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Environment variable naming the vault container
    #[arg(long, default_value = VAULT_ENV_VAR, value_name = "NAME")]
    pub vault_env_var: String,

    /// Explicit container path (skips resolution)
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,
}

impl VaultArgs {
    fn container(&self) -> Result<VaultContainer> {
        let mut builder =
            VaultContainer::builder(SourceDescriptor::vault().with_env_var(&self.vault_env_var));
        if let Some(key) = &self.key {
            builder = builder.with_key(SecretString::new(key.clone().into()));
        }
        if let Some(default_key) = env_var_or_none(VAULT_KEY_ENV_VAR) {
            builder = builder.with_default_key(SecretString::new(default_key.into()));
        }
        if let Some(path) = &self.path {
            builder = builder.with_path(path.clone());
        }
        builder.build().context("Failed to open vault container")
    }
}

pub fn run(command: VaultCommand) -> Result<()> {
    match command {
        VaultCommand::Init(args) => run_init(&args),
        VaultCommand::Seal { vault, input } => run_seal(&vault, &input),
        VaultCommand::Show(args) => run_show(&args),
    }
}

fn run_init(args: &VaultArgs) -> Result<()> {
    let vault = args.container()?;
    let created = vault
        .ensure_exists()
        .with_context(|| format!("Failed to create {}", vault.path().display()))?;
    if created {
        println!("Created vault container at {}", vault.path().display());
    } else {
        println!("Vault container already exists at {}", vault.path().display());
    }
    Ok(())
}

fn run_seal(args: &VaultArgs, input: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    let vault = args.container()?;
    vault.seal(&document).context("Failed to seal vault")?;
    println!("Sealed {} into {}", input.display(), vault.path().display());
    Ok(())
}

fn run_show(args: &VaultArgs) -> Result<()> {
    let vault = args.container()?;
    let document = vault.unseal().context("Failed to unseal vault")?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
