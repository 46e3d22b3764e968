//! Error types for configuration resolution and loading.
//!
//! Responsibilities:
//! - Define error variants for every failure of path resolution, document
//!   loading, section narrowing, projection, and vault provisioning.
//!
//! Does NOT handle:
//! - Encryption failures of sealed vault contents (see `encryption.rs`).
//!
//! Invariants:
//! - All error variants carry enough context to act on (env variable, path,
//!   dotted section, offending field).
//! - Vault keys are never included in any error message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, loading, or projecting configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// None of the candidate paths named an existing regular file.
    #[error("Can't find config: no candidate for {env_var} exists (tried {})", display_candidates(.candidates))]
    SourceNotFound {
        env_var: String,
        candidates: Vec<PathBuf>,
    },

    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The dotted section resolved to an absent or empty value.
    #[error("Can't find section '{0}' in file")]
    SectionNotFound(String),

    /// A document key collides with a reserved configuration field.
    #[error("Key '{field}' collides with a reserved configuration field")]
    ReservedField { field: String },

    /// No usable vault key was supplied at the call site or as a default.
    #[error("Vault key is required (pass a key or configure a default)")]
    InvalidKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_lists_candidates() {
        let err = ConfigError::SourceNotFound {
            env_var: "APP_CONFIGFILE".to_string(),
            candidates: vec![PathBuf::from("foo"), PathBuf::from("foo.json")],
        };
        let msg = err.to_string();
        assert!(msg.contains("APP_CONFIGFILE"));
        assert!(msg.contains("'foo', 'foo.json'"));
    }

    #[test]
    fn test_section_not_found_names_full_path() {
        let err = ConfigError::SectionNotFound("missing.path".to_string());
        assert_eq!(err.to_string(), "Can't find section 'missing.path' in file");
    }
}
