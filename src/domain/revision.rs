//! Revision a dependency was pinned to

use super::SemanticVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pinned state of a dependency: an exact version or a tracked branch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Revision {
    /// Pinned to an exact version
    Tag(SemanticVersion),
    /// Tracking a named branch or ref
    Branch(String),
}

impl Revision {
    /// Creates a branch revision
    pub fn branch(name: impl Into<String>) -> Self {
        Revision::Branch(name.into())
    }

    /// Returns true if this revision is a version tag
    pub fn is_tag(&self) -> bool {
        matches!(self, Revision::Tag(_))
    }

    /// Returns the version if this revision is a tag
    pub fn as_tag(&self) -> Option<&SemanticVersion> {
        match self {
            Revision::Tag(version) => Some(version),
            Revision::Branch(_) => None,
        }
    }
}

impl From<SemanticVersion> for Revision {
    fn from(version: SemanticVersion) -> Self {
        Revision::Tag(version)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Tag(version) => write!(f, "{}", version),
            Revision::Branch(name) => write!(f, "{}", name),
        }
    }
}
