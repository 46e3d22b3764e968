//! Source resolution and document loading.
//!
//! Responsibilities:
//! - Locate the configuration file from an env variable and naming conventions.
//! - Parse the file (or inline text) as JSON and narrow it to a dotted section.
//!
//! Does NOT handle:
//! - Projecting keys onto a queryable object (see `projection.rs`).
//! - Creating files (see `persistence::vault`).
//!
//! Invariants / Assumptions:
//! - Resolution and loading are blocking and single-shot; nothing is cached.
//! - Empty or whitespace-only environment variables are treated as unset.

pub mod document;
mod env;
mod error;
pub mod resolver;

pub use env::{env_token, env_var_or_none};
pub use error::ConfigError;
