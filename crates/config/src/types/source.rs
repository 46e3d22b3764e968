//! Where configuration bytes come from.

use std::path::{Path, PathBuf};

/// A resolved configuration source: a file on disk or an inline JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Path(PathBuf),
    Inline(String),
}

impl ConfigSource {
    /// Classify raw text: anything containing a newline is an inline document,
    /// everything else is a path.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.contains('\n') {
            Self::Inline(text)
        } else {
            Self::Path(PathBuf::from(text))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Inline(_) => None,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    /// Label used in logs and error messages. Inline content is never echoed.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Inline(_) => "<inline>".to_string(),
        }
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}
