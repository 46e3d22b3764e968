//! Dotted section addressing.

use std::fmt;

use crate::constants::SECTION_SEPARATOR;

/// Ordered sequence of segments locating a subtree of the parsed document.
///
/// Only [`SectionPath::root`] addresses the whole document. Segments are taken
/// verbatim from the dotted string: `""` is one empty segment and `"a..b"` has an
/// empty middle one. An empty segment never matches a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionPath {
    segments: Vec<String>,
}

impl SectionPath {
    /// The whole-document path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Split a dotted string into segments.
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted.split(SECTION_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Compose `self + "." + child`; on the root this is `child` alone.
    pub fn join(&self, child: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(Self::parse(child).segments);
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The dotted form, or `None` for the root.
    pub fn dotted(&self) -> Option<String> {
        if self.is_root() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", SECTION_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

impl From<&str> for SectionPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}
