//! Release note entries handed to the output formatters

use super::{PackageUpdate, Revision};
use serde::{Deserialize, Serialize};

/// A changed dependency together with where its release notes live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNote {
    /// Dependency name as printed in the log
    pub package_name: String,
    /// Revision the dependency was pinned to before the update
    pub old_revision: Option<Revision>,
    /// Release page of the dependency's repository, when it is known
    pub releases_url: Option<String>,
}

impl ReleaseNote {
    /// Creates a release note for an update
    pub fn new(update: PackageUpdate, releases_url: Option<String>) -> Self {
        Self {
            package_name: update.package_name,
            old_revision: update.old_revision,
            releases_url,
        }
    }

    /// Returns true if the dependency did not exist before the update
    pub fn is_new_package(&self) -> bool {
        self.old_revision.is_none()
    }

    /// The releases URL, or the package name when no URL is known
    pub fn link_or_name(&self) -> &str {
        self.releases_url.as_deref().unwrap_or(&self.package_name)
    }

    /// Description of the previous state (`4.54.0`, `main`, `new package`)
    pub fn updating_from(&self) -> String {
        match &self.old_revision {
            Some(revision) => revision.to_string(),
            None => "new package".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SemanticVersion;

    #[test]
    fn test_with_url() {
        let note = ReleaseNote::new(
            PackageUpdate::updated("vapor", SemanticVersion::new(4, 54, 0).into()),
            Some("https://github.com/vapor/vapor/releases".to_string()),
        );
        assert_eq!(note.link_or_name(), "https://github.com/vapor/vapor/releases");
        assert_eq!(note.updating_from(), "4.54.0");
        assert!(!note.is_new_package());
    }

    #[test]
    fn test_without_url() {
        let note = ReleaseNote::new(PackageUpdate::added("swift-collections"), None);
        assert_eq!(note.link_or_name(), "swift-collections");
        assert_eq!(note.updating_from(), "new package");
        assert!(note.is_new_package());
    }
}
