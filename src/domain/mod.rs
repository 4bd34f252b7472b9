//! Core domain models for release-notes
//!
//! This module contains the values produced by parsing an update log:
//! - Semantic versions and revisions a dependency was pinned to
//! - Per-dependency change records
//! - Release note entries for output

mod package_update;
mod release_note;
mod revision;
mod semantic_version;

pub use package_update::PackageUpdate;
pub use release_note::ReleaseNote;
pub use revision::Revision;
pub use semantic_version::SemanticVersion;
