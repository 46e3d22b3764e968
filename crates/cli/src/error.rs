//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `EncryptionError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use jsoncfg::{ConfigError, EncryptionError};

/// Structured exit codes for jsoncfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// No configuration file could be located.
    SourceNotFound = 2,

    /// The configuration document is not valid JSON.
    ParseError = 3,

    /// The requested section is missing or empty.
    SectionNotFound = 4,

    /// Vault key missing, or vault contents could not be sealed/unsealed.
    VaultError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::SourceNotFound { .. } => ExitCode::SourceNotFound,
            ConfigError::Parse { .. } => ExitCode::ParseError,
            ConfigError::SectionNotFound(_) => ExitCode::SectionNotFound,
            ConfigError::InvalidKey => ExitCode::VaultError,
            ConfigError::Read { .. } | ConfigError::ReservedField { .. } | ConfigError::Io(_) => {
                ExitCode::GeneralError
            }
        }
    }
}

impl From<&EncryptionError> for ExitCode {
    fn from(err: &EncryptionError) -> Self {
        match err {
            EncryptionError::Config(inner) => Self::from(inner),
            EncryptionError::Io(_) => ExitCode::GeneralError,
            _ => ExitCode::VaultError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<EncryptionError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}
