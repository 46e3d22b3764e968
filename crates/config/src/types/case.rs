//! Key case normalization.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule applied to every document key on load and to every lookup key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasePolicy {
    /// Keys are used exactly as written.
    #[default]
    AsIs,
    /// Keys are uppercased (`str::to_uppercase`), with no other folding.
    Upper,
}

impl CasePolicy {
    /// Build a policy from the boolean "uppercase" flag.
    pub fn from_uppercase(uppercase: bool) -> Self {
        if uppercase { Self::Upper } else { Self::AsIs }
    }

    /// Whether this policy uppercases keys.
    pub fn is_upper(self) -> bool {
        matches!(self, Self::Upper)
    }

    /// Convert a key according to this policy.
    pub fn apply<'a>(self, key: &'a str) -> Cow<'a, str> {
        match self {
            Self::AsIs => Cow::Borrowed(key),
            Self::Upper => Cow::Owned(key.to_uppercase()),
        }
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AsIs => write!(f, "as-is"),
            Self::Upper => write!(f, "upper"),
        }
    }
}
