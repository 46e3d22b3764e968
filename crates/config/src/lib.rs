//! Structured access to JSON configuration documents.
//!
//! This crate locates a configuration document from an environment variable and
//! naming conventions, narrows it to a dotted section, and exposes the section's
//! keys as case-normalized fields. A sibling vault container, located the same
//! way, can be provisioned and used to hold an encrypted document.

pub mod constants;
pub mod encryption;
pub mod loader;
pub mod persistence;
pub mod projection;
pub mod types;
mod view;

pub use encryption::EncryptionError;
pub use loader::{ConfigError, env_var_or_none};
pub use persistence::{VaultBuilder, VaultContainer};
pub use projection::{Projection, RESERVED_FIELDS};
pub use types::{CasePolicy, ConfigSource, SectionPath, SourceDescriptor};
pub use view::{SectionView, ViewOptions};
