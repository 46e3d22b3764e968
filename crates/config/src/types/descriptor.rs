//! Naming conventions for locating a configuration source.

use crate::constants::{
    CONFIG_ENV_VAR, CONFIG_EXTENSION, DEFAULT_CONFIG_BASE_NAME, DEFAULT_VAULT_BASE_NAME,
    VAULT_ENV_VAR, VAULT_EXTENSION,
};
use crate::loader::env_token;

/// Env variable, extension, and default base name used to find one kind of file.
///
/// Passed explicitly to every constructor instead of living in a process-wide registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    env_var: String,
    extension: String,
    default_base_name: String,
}

impl SourceDescriptor {
    pub fn new(
        env_var: impl Into<String>,
        extension: impl Into<String>,
        default_base_name: impl Into<String>,
    ) -> Self {
        Self {
            env_var: env_var.into(),
            extension: extension.into(),
            default_base_name: default_base_name.into(),
        }
    }

    /// `APP_CONFIGFILE`, `.json`, `configuration`.
    pub fn config() -> Self {
        Self::new(CONFIG_ENV_VAR, CONFIG_EXTENSION, DEFAULT_CONFIG_BASE_NAME)
    }

    /// `APP_VAULTFILE`, `.vault`, `secrets`.
    pub fn vault() -> Self {
        Self::new(VAULT_ENV_VAR, VAULT_EXTENSION, DEFAULT_VAULT_BASE_NAME)
    }

    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_default_base_name(mut self, name: impl Into<String>) -> Self {
        self.default_base_name = name.into();
        self
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn default_base_name(&self) -> &str {
        &self.default_base_name
    }

    /// Current value of the env variable, or the empty string when unset.
    pub fn env_token(&self) -> String {
        env_token(&self.env_var)
    }
}

impl Default for SourceDescriptor {
    fn default() -> Self {
        Self::config()
    }
}
