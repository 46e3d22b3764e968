//! Shared test utilities for jsoncfg integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Lay out configuration documents in a temporary working directory.
//!
//! Invariants / Assumptions:
//! - Every command runs inside its own temporary directory.
//! - `APP_*` variables from the host never leak into a test.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a hermetic `jsoncfg` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `APP_CONFIGFILE`, `APP_VAULTFILE`, and `APP_VAULT_KEY` are cleared.
pub fn jsoncfg_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jsoncfg");

    cmd.current_dir(dir);
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("APP_CONFIGFILE")
        .env_remove("APP_VAULTFILE")
        .env_remove("APP_VAULT_KEY")
        .env_remove("RUST_LOG");

    cmd
}

/// Creates an empty `<tmp>/work` working directory.
///
/// The sibling `<tmp>/data` is what `../data` resolves to, so host files never
/// leak into resolution.
pub fn workspace() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let work = temp_dir.path().join("work");
    fs::create_dir_all(&work).expect("Failed to create work directory");
    (temp_dir, work)
}

/// Creates `<tmp>/work` with `configuration.json` holding `body`.
#[allow(dead_code)]
pub fn workspace_with_config(body: &str) -> (TempDir, PathBuf) {
    let (temp_dir, work) = workspace();
    fs::write(work.join("configuration.json"), body).expect("Failed to write config");
    (temp_dir, work)
}
