//! On-disk vault containers.
//!
//! Responsibilities:
//! - Provision vault containers (create parents and an empty file).
//! - Seal and unseal an encrypted JSON document inside a container.
//!
//! Does NOT handle:
//! - Loading configuration documents (see `loader`).
//! - Any write to configuration documents; those are read-only.
//!
//! Invariants:
//! - Provisioning is idempotent and never touches an existing file.
//! - Sealed writes are atomic (temp file + rename).

mod seal;
mod vault;

pub use vault::{VaultBuilder, VaultContainer, provisioning_path};
