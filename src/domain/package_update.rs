//! Per-dependency change records parsed from the update log

use super::Revision;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One changed dependency
///
/// `old_revision` is `None` exactly when the dependency is newly added.
/// The revision it changed to is not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageUpdate {
    /// Dependency name as printed in the log (not a URL)
    pub package_name: String,
    /// Revision the dependency was pinned to before the update
    pub old_revision: Option<Revision>,
}

impl PackageUpdate {
    /// Creates a record for a newly added dependency
    pub fn added(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            old_revision: None,
        }
    }

    /// Creates a record for a dependency whose revision changed
    pub fn updated(package_name: impl Into<String>, old_revision: Revision) -> Self {
        Self {
            package_name: package_name.into(),
            old_revision: Some(old_revision),
        }
    }

    /// Returns true if the dependency did not exist before the update
    pub fn is_new_package(&self) -> bool {
        self.old_revision.is_none()
    }
}

impl fmt::Display for PackageUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.old_revision {
            Some(revision) => write!(f, "{} ({})", self.package_name, revision),
            None => write!(f, "{} (new package)", self.package_name),
        }
    }
}
