//! Environment variable access for source resolution.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Turn a descriptor's env variable into the base token used by the resolver.
//!
//! Does NOT handle:
//! - Candidate path construction (see `resolver.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Base token for path resolution: the variable's value, or the empty string when unset.
pub fn env_token(key: &str) -> String {
    env_var_or_none(key).unwrap_or_default()
}
