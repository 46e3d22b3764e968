//! Centralized constants for source resolution and vault handling.

// =============================================================================
// Configuration document
// =============================================================================

/// Environment variable naming the configuration document.
pub const CONFIG_ENV_VAR: &str = "APP_CONFIGFILE";

/// File extension of configuration documents.
pub const CONFIG_EXTENSION: &str = "json";

/// Base name searched when no override resolves.
pub const DEFAULT_CONFIG_BASE_NAME: &str = "configuration";

// =============================================================================
// Vault container
// =============================================================================

/// Environment variable naming the vault container.
pub const VAULT_ENV_VAR: &str = "APP_VAULTFILE";

/// File extension of vault containers.
pub const VAULT_EXTENSION: &str = "vault";

/// Environment variable holding the fallback vault key.
pub const VAULT_KEY_ENV_VAR: &str = "APP_VAULT_KEY";

/// Base name of the vault container when no override resolves.
pub const DEFAULT_VAULT_BASE_NAME: &str = "secrets";

/// Format version written into sealed vault envelopes.
pub const SEALED_VAULT_VERSION: u32 = 1;

// =============================================================================
// Resolution
// =============================================================================

/// Secondary search root, one level above the working directory.
pub const SECONDARY_SEARCH_ROOT: &str = "../data";

/// Separator between section path segments.
pub const SECTION_SEPARATOR: char = '.';
