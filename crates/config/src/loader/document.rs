//! Document loading and section narrowing.
//!
//! Responsibilities:
//! - Read a `ConfigSource` (file or inline text) into a `serde_json::Value`.
//! - Walk a `SectionPath` down the parsed tree.
//!
//! Does NOT handle:
//! - Locating the file (see `resolver.rs`).
//! - Exposing keys as fields (see `projection.rs`).
//!
//! Invariants:
//! - Malformed JSON is always fatal; nothing is recovered or retried.
//! - A walk step into a missing key, or into a non-object, yields an empty object.
//! - After the walk, an empty value (`{}`, `[]`, `""`, `0`, `false`, `null`) is
//!   `SectionNotFound`: absent and empty sections are indistinguishable.
//! - A non-object result is returned as-is; the caller decides what it projects.

use serde_json::{Map, Value};

use super::error::ConfigError;
use crate::types::{ConfigSource, SectionPath};

/// Read and parse the whole document behind `source`.
pub fn read_document(source: &ConfigSource) -> Result<Value, ConfigError> {
    let parsed = match source {
        ConfigSource::Path(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content)
        }
        ConfigSource::Inline(text) => serde_json::from_str(text),
    };

    parsed.map_err(|e| ConfigError::Parse {
        origin: source.describe(),
        source: e,
    })
}

/// Narrow `document` to the subtree at `section`.
pub fn narrow(document: Value, section: &SectionPath) -> Result<Value, ConfigError> {
    if section.is_root() {
        return Ok(document);
    }

    let mut current = document;
    for segment in section.segments() {
        current = match current {
            Value::Object(mut map) => map
                .remove(segment.as_str())
                .unwrap_or_else(|| Value::Object(Map::new())),
            _ => Value::Object(Map::new()),
        };
    }

    if is_empty_value(&current) {
        return Err(ConfigError::SectionNotFound(section.to_string()));
    }
    Ok(current)
}

/// Read `source` and narrow it to `section`.
pub fn load(source: &ConfigSource, section: &SectionPath) -> Result<Value, ConfigError> {
    let document = read_document(source)?;
    let narrowed = narrow(document, section)?;
    tracing::debug!(
        source = %source.describe(),
        section = %section,
        "Loaded configuration document"
    );
    Ok(narrowed)
}

/// JSON falsiness: what a section walk treats as "nothing there".
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
