//! Section views over a resolved configuration source.
//!
//! Responsibilities:
//! - Build a root view: resolve the source, load the document, project fields.
//! - Derive child views for nested sections without re-resolving the source.
//! - Reload a view in place from its source.
//!
//! Does NOT handle:
//! - Watching the source for changes; reload is always explicit.
//! - Writing anything back to the source.
//!
//! Invariants:
//! - The source of a view never changes; child views share it through `Arc`.
//! - Case policy is fixed per view at construction or extraction.
//! - Parent and child views share no mutable state.
//! - A failed `reload` leaves the previous fields in place.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::constants::CONFIG_EXTENSION;
use crate::loader::{ConfigError, document, resolver};
use crate::projection::Projection;
use crate::types::{CasePolicy, ConfigSource, SectionPath, SourceDescriptor};

/// Options for constructing a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub case: CasePolicy,
    pub section: Option<String>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case(mut self, case: CasePolicy) -> Self {
        self.case = case;
        self
    }

    /// Shorthand for `with_case(CasePolicy::Upper)`.
    pub fn uppercase(self) -> Self {
        self.with_case(CasePolicy::Upper)
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// A configuration section projected onto queryable fields.
///
/// ```rust,no_run
/// use jsoncfg::{SectionView, SourceDescriptor, ViewOptions};
///
/// # fn main() -> Result<(), jsoncfg::ConfigError> {
/// let root = SectionView::open(&SourceDescriptor::config(), ViewOptions::new().uppercase())?;
/// let db = root.extract(Some("database"), None)?;
/// let host = db.lookup("host");
/// # let _ = host;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SectionView {
    source: Arc<ConfigSource>,
    extension: String,
    section: SectionPath,
    projection: Projection,
}

impl SectionView {
    /// Resolve the descriptor's source from the environment and load it.
    pub fn open(descriptor: &SourceDescriptor, options: ViewOptions) -> Result<Self, ConfigError> {
        let path = resolver::resolve(descriptor)?;
        Self::from_source(
            Arc::new(ConfigSource::Path(path)),
            descriptor.extension(),
            options,
        )
    }

    /// Load a view from an already resolved source.
    pub fn from_source(
        source: Arc<ConfigSource>,
        extension: impl Into<String>,
        options: ViewOptions,
    ) -> Result<Self, ConfigError> {
        let section = options
            .section
            .as_deref()
            .map(SectionPath::parse)
            .unwrap_or_default();

        let mut view = Self {
            source,
            extension: extension.into(),
            section,
            projection: Projection::new(options.case),
        };
        view.reload()?;
        Ok(view)
    }

    /// Load a view from a path or inline JSON text (text containing a newline).
    pub fn from_text(text: impl Into<String>, options: ViewOptions) -> Result<Self, ConfigError> {
        Self::from_source(
            Arc::new(ConfigSource::from_text(text)),
            CONFIG_EXTENSION,
            options,
        )
    }

    /// Re-read the source and rebuild the field set.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let document = document::load(&self.source, &self.section)?;
        self.projection.project(document)
    }

    /// Derive a view for `section` nested under this one.
    ///
    /// `None` returns a copy of this view unchanged, ignoring `case`. `Some("")` is
    /// an empty segment like any other and fails with `SectionNotFound`. Without a
    /// case override the child inherits this view's policy.
    pub fn extract(
        &self,
        section: Option<&str>,
        case: Option<CasePolicy>,
    ) -> Result<Self, ConfigError> {
        let Some(child) = section else {
            return Ok(self.clone());
        };

        let options = ViewOptions {
            case: case.unwrap_or(self.case_policy()),
            section: Some(self.section.join(child).to_string()),
        };
        tracing::debug!(
            parent = %self.section,
            child = child,
            "Extracting configuration section"
        );
        Self::from_source(Arc::clone(&self.source), self.extension.clone(), options)
    }

    /// `extract` for dynamically typed input: only a JSON string names a section,
    /// anything else yields this view unchanged.
    pub fn extract_value(
        &self,
        section: &Value,
        case: Option<CasePolicy>,
    ) -> Result<Self, ConfigError> {
        self.extract(section.as_str(), case)
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.projection.lookup(key)
    }

    pub fn get<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.projection.get(key, default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.projection.contains(key)
    }

    /// Public fields whose names start with `prefix` (all of them when `None`).
    pub fn enumerate(&self, prefix: Option<&str>) -> BTreeMap<String, Value> {
        self.projection.enumerate(prefix)
    }

    pub fn len(&self) -> usize {
        self.projection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projection.is_empty()
    }

    pub fn section(&self) -> &SectionPath {
        &self.section
    }

    pub fn case_policy(&self) -> CasePolicy {
        self.projection.case_policy()
    }

    pub fn source(&self) -> &Arc<ConfigSource> {
        &self.source
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}
