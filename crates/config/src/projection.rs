//! Projection of document keys onto queryable fields.
//!
//! Responsibilities:
//! - Hold the field set (`name -> JSON value`) exposed by a view.
//! - Rebuild that set from a freshly loaded document, applying the case policy.
//! - Look fields up with defaulting, and enumerate them with prefix filtering.
//!
//! Does NOT handle:
//! - Reading documents or walking sections (see `loader::document`).
//!
//! Invariants:
//! - After `project`, the field set mirrors exactly the latest mapping; stale
//!   fields from earlier loads are gone.
//! - A key that case-converts to a reserved field name is rejected and the
//!   previous field set is kept untouched.
//! - `enumerate` is recomputed from the current fields on every call.
//! - Prefix matching is a raw string prefix test, not a dotted-segment match.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::loader::ConfigError;
use crate::types::CasePolicy;

/// Field names used by the configuration machinery itself: case policy,
/// section path, source reference, and extension tag.
pub const RESERVED_FIELDS: [&str; 4] = ["uppercase", "section", "config", "extension"];

/// Leading marker of internal fields, hidden from enumeration.
pub const INTERNAL_FIELD_PREFIX: char = '_';

pub fn is_reserved(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

/// The projected field set of one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    case: CasePolicy,
    fields: BTreeMap<String, Value>,
}

impl Projection {
    pub fn new(case: CasePolicy) -> Self {
        Self {
            case,
            fields: BTreeMap::new(),
        }
    }

    pub fn case_policy(&self) -> CasePolicy {
        self.case
    }

    /// Replace the field set with the keys of `document`.
    ///
    /// A non-object document projects no fields. On collision with a reserved
    /// name nothing changes and `ReservedField` is returned.
    pub fn project(&mut self, document: Value) -> Result<(), ConfigError> {
        let Value::Object(map) = document else {
            tracing::warn!("Configuration section is not an object; no fields projected");
            self.fields.clear();
            return Ok(());
        };

        let mut fields = BTreeMap::new();
        for (key, value) in map {
            let name = self.case.apply(&key).into_owned();
            if is_reserved(&name) {
                return Err(ConfigError::ReservedField { field: name });
            }
            fields.insert(name, value);
        }

        tracing::trace!(count = fields.len(), "Projected configuration fields");
        self.fields = fields;
        Ok(())
    }

    /// Look up `key` after case conversion.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.fields.get(self.case.apply(key).as_ref())
    }

    /// Look up `key`, falling back to `default`. The default is returned as given.
    pub fn get<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.lookup(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Public fields, optionally restricted to names starting with `prefix`.
    ///
    /// Excludes reserved names and `_`-prefixed names. The prefix is case-converted
    /// and matched as a literal string prefix, so `DB` selects both `DB_HOST` and `DBX`.
    pub fn enumerate(&self, prefix: Option<&str>) -> BTreeMap<String, Value> {
        let prefix = prefix.map(|p| self.case.apply(p));
        self.fields
            .iter()
            .filter(|(name, _)| Self::is_public(name))
            .filter(|(name, _)| match prefix.as_deref() {
                None | Some("") => true,
                Some(p) => name.as_str() == p || name.starts_with(p),
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Every projected field name, internal ones included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn is_public(name: &str) -> bool {
        !is_reserved(name) && !name.starts_with(INTERNAL_FIELD_PREFIX)
    }
}
