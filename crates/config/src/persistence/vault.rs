//! Vault container provisioning.
//!
//! Responsibilities:
//! - Locate the vault container with the same rules as configuration documents.
//! - Hold the vault key as an opaque secret for collaborators.
//! - Create the container (and missing parent directories) on demand.
//!
//! Does NOT handle:
//! - Reading or writing container contents (see `seal.rs`).
//!
//! Invariants:
//! - A container is never constructed without a non-empty key.
//! - `ensure_exists` never truncates or rewrites an existing file.
//! - The key is never written, logged, or validated beyond being non-empty.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use crate::loader::{ConfigError, resolver};
use crate::types::SourceDescriptor;

/// A file intended to hold sensitive values, identified like a config source.
#[derive(Debug)]
pub struct VaultContainer {
    path: PathBuf,
    key: SecretString,
}

impl VaultContainer {
    /// Start building a container located by `descriptor`.
    pub fn builder(descriptor: SourceDescriptor) -> VaultBuilder {
        VaultBuilder::new(descriptor)
    }

    /// Container located from `descriptor`'s env variable, relative to the working
    /// directory.
    pub fn resolve(
        descriptor: SourceDescriptor,
        key: Option<SecretString>,
        default_key: Option<SecretString>,
    ) -> Result<Self, ConfigError> {
        let key = choose_key(key, default_key)?;
        let token = descriptor.env_token();
        let path = provisioning_path(Path::new(""), &descriptor, &token)?;
        Ok(Self { path, key })
    }

    /// Container at an explicit path, keyed by `key` or else `default_key`.
    pub fn at(
        path: impl Into<PathBuf>,
        key: Option<SecretString>,
        default_key: Option<SecretString>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            path: path.into(),
            key: choose_key(key, default_key)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &SecretString {
        &self.key
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create an empty container unless a regular file is already there.
    ///
    /// Returns `true` when the file was created by this call.
    pub fn ensure_exists(&self) -> Result<bool, ConfigError> {
        if self.exists() {
            tracing::debug!(path = %self.path.display(), "Vault container already exists");
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;

        tracing::info!(path = %self.path.display(), "Created vault container");
        Ok(true)
    }
}

/// Builder for [`VaultContainer`].
pub struct VaultBuilder {
    descriptor: SourceDescriptor,
    base_dir: PathBuf,
    token: Option<String>,
    path: Option<PathBuf>,
    key: Option<SecretString>,
    default_key: Option<SecretString>,
}

impl VaultBuilder {
    fn new(descriptor: SourceDescriptor) -> Self {
        Self {
            descriptor,
            base_dir: PathBuf::new(),
            token: None,
            path: None,
            key: None,
            default_key: None,
        }
    }

    /// Key supplied at the call site; takes precedence over the default.
    pub fn with_key(mut self, key: SecretString) -> Self {
        self.key = Some(key);
        self
    }

    /// Fallback key used when no call-site key is given.
    pub fn with_default_key(mut self, key: SecretString) -> Self {
        self.default_key = Some(key);
        self
    }

    /// Resolve relative to `dir` instead of the working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Use `token` instead of reading the descriptor's env variable.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Skip resolution and use this path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<VaultContainer, ConfigError> {
        let key = choose_key(self.key, self.default_key)?;
        let path = match self.path {
            Some(path) => path,
            None => {
                let token = self
                    .token
                    .unwrap_or_else(|| self.descriptor.env_token());
                provisioning_path(&self.base_dir, &self.descriptor, &token)?
            }
        };
        Ok(VaultContainer { path, key })
    }
}

/// First existing candidate, or where a new container should be created: the raw
/// token when one is set, else `<default>.<ext>` in the base directory.
pub fn provisioning_path(
    base_dir: &Path,
    descriptor: &SourceDescriptor,
    token: &str,
) -> Result<PathBuf, ConfigError> {
    match resolver::resolve_from(base_dir, descriptor, token) {
        Ok(path) => Ok(path),
        Err(ConfigError::SourceNotFound { .. }) => {
            let target = if token.is_empty() {
                format!(
                    "{}.{}",
                    descriptor.default_base_name(),
                    descriptor.extension()
                )
            } else {
                token.to_string()
            };
            Ok(base_dir.join(target))
        }
        Err(e) => Err(e),
    }
}

fn choose_key(
    key: Option<SecretString>,
    default_key: Option<SecretString>,
) -> Result<SecretString, ConfigError> {
    key.into_iter()
        .chain(default_key)
        .find(|k| !k.expose_secret().is_empty())
        .ok_or(ConfigError::InvalidKey)
}
