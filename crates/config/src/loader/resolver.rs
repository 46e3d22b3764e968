//! Configuration file location.
//!
//! Responsibilities:
//! - Build the ordered list of candidate paths for a descriptor and base token.
//! - Return the first candidate that names an existing regular file.
//!
//! Does NOT handle:
//! - Reading or parsing the file (see `document.rs`).
//! - Creating missing files (see `persistence::vault`).
//!
//! Invariants:
//! - Candidate order is fixed: token, token.ext, default.ext, then the same three
//!   under `../data/`.
//! - Exactly one candidate is returned; candidates are never merged.
//! - Resolution happens once per root view and is never retried.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::SECONDARY_SEARCH_ROOT;
use crate::types::SourceDescriptor;

/// Ordered candidate paths for `token` under `descriptor`'s naming rules.
pub fn candidate_paths(descriptor: &SourceDescriptor, token: &str) -> Vec<PathBuf> {
    let ext = descriptor.extension();
    let default = descriptor.default_base_name();

    let rules = [
        token.to_string(),
        format!("{}.{}", token, ext),
        format!("{}.{}", default, ext),
    ];

    let primary = rules.iter().map(PathBuf::from);
    let secondary = rules
        .iter()
        .map(|rule| PathBuf::from(format!("{}/{}", SECONDARY_SEARCH_ROOT, rule)));

    primary.chain(secondary).collect()
}

/// Resolve relative to the working directory using the descriptor's env variable.
pub fn resolve(descriptor: &SourceDescriptor) -> Result<PathBuf, ConfigError> {
    resolve_from(Path::new(""), descriptor, &descriptor.env_token())
}

/// Resolve relative to `base_dir` with an explicit base token.
///
/// Absolute candidates ignore `base_dir`, following `Path::join`.
pub fn resolve_from(
    base_dir: &Path,
    descriptor: &SourceDescriptor,
    token: &str,
) -> Result<PathBuf, ConfigError> {
    let candidates = candidate_paths(descriptor, token);

    for candidate in &candidates {
        let path = base_dir.join(candidate);
        tracing::trace!(candidate = %path.display(), "Probing config candidate");
        if path.is_file() {
            tracing::debug!(
                env_var = descriptor.env_var(),
                path = %path.display(),
                "Resolved configuration source"
            );
            return Ok(path);
        }
    }

    Err(ConfigError::SourceNotFound {
        env_var: descriptor.env_var().to_string(),
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Lays out `<tmp>/work` as the working directory and `<tmp>/data` as the
    /// secondary root reached through `../data`.
    fn layout() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let work = temp_dir.path().join("work");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(temp_dir.path().join("data")).unwrap();
        (temp_dir, work)
    }

    fn touch(path: &Path) {
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn test_candidate_order() {
        let candidates = candidate_paths(&SourceDescriptor::config(), "foo");
        let expected: Vec<PathBuf> = [
            "foo",
            "foo.json",
            "configuration.json",
            "../data/foo",
            "../data/foo.json",
            "../data/configuration.json",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_empty_token_candidates() {
        let candidates = candidate_paths(&SourceDescriptor::config(), "");
        assert_eq!(candidates[0], PathBuf::from(""));
        assert_eq!(candidates[1], PathBuf::from(".json"));
        assert_eq!(candidates[2], PathBuf::from("configuration.json"));
        assert_eq!(candidates[5], PathBuf::from("../data/configuration.json"));
    }

    #[test]
    fn test_raw_token_wins_over_extension() {
        let (_tmp, work) = layout();
        touch(&work.join("foo"));
        touch(&work.join("foo.json"));

        let resolved = resolve_from(&work, &SourceDescriptor::config(), "foo").unwrap();
        assert_eq!(resolved, work.join("foo"));
    }

    #[test]
    fn test_token_with_extension() {
        let (_tmp, work) = layout();
        touch(&work.join("foo.json"));
        touch(&work.join("configuration.json"));

        let resolved = resolve_from(&work, &SourceDescriptor::config(), "foo").unwrap();
        assert_eq!(resolved, work.join("foo.json"));
    }

    #[test]
    fn test_default_name_ignores_token() {
        let (_tmp, work) = layout();
        touch(&work.join("configuration.json"));

        let resolved = resolve_from(&work, &SourceDescriptor::config(), "foo").unwrap();
        assert_eq!(resolved, work.join("configuration.json"));
    }

    #[test]
    fn test_working_directory_beats_secondary_root() {
        let (tmp, work) = layout();
        touch(&work.join("configuration.json"));
        touch(&tmp.path().join("data").join("foo"));

        let resolved = resolve_from(&work, &SourceDescriptor::config(), "foo").unwrap();
        assert_eq!(resolved, work.join("configuration.json"));
    }

    #[test]
    fn test_secondary_root_fallback() {
        let (tmp, work) = layout();
        touch(&tmp.path().join("data").join("configuration.json"));

        let resolved = resolve_from(&work, &SourceDescriptor::config(), "").unwrap();
        assert_eq!(resolved, work.join("../data/configuration.json"));
        assert!(resolved.is_file());
    }

    #[test]
    fn test_directories_are_not_candidates() {
        let (_tmp, work) = layout();
        fs::create_dir_all(work.join("foo")).unwrap();
        touch(&work.join("foo.json"));

        let resolved = resolve_from(&work, &SourceDescriptor::config(), "foo").unwrap();
        assert_eq!(resolved, work.join("foo.json"));
    }

    #[test]
    fn test_absolute_token_ignores_base_dir() {
        let (tmp, work) = layout();
        let elsewhere = tmp.path().join("elsewhere.json");
        touch(&elsewhere);

        let token = elsewhere.to_string_lossy().into_owned();
        let resolved = resolve_from(&work, &SourceDescriptor::config(), &token).unwrap();
        assert_eq!(resolved, elsewhere);
    }

    #[test]
    fn test_nothing_found() {
        let (_tmp, work) = layout();

        let err = resolve_from(&work, &SourceDescriptor::config(), "foo").unwrap_err();
        match err {
            ConfigError::SourceNotFound {
                env_var,
                candidates,
            } => {
                assert_eq!(env_var, "APP_CONFIGFILE");
                assert_eq!(candidates.len(), 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_extension() {
        let (_tmp, work) = layout();
        touch(&work.join("settings.conf"));

        let descriptor = SourceDescriptor::config()
            .with_extension("conf")
            .with_default_base_name("settings");
        let resolved = resolve_from(&work, &descriptor, "").unwrap();
        assert_eq!(resolved, work.join("settings.conf"));
    }
}
