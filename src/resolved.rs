//! Package.resolved reader
//!
//! The update log names dependencies, not repositories. The pin file the
//! package manager keeps next to Package.swift maps those names to
//! repository locations, from which release page URLs are derived.
//!
//! Handles:
//! - version 1 (`object.pins[].package` / `repositoryURL`)
//! - versions 2 and 3 (`pins[].identity` / `location`)

use crate::domain::{PackageUpdate, ReleaseNote};
use crate::error::ResolvedError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// File name of the pin file inside a package directory
pub const RESOLVED_FILENAME: &str = "Package.resolved";

#[derive(Deserialize)]
#[serde(untagged)]
enum ResolvedFile {
    V1 { object: PinsV1, version: u64 },
    V2 { pins: Vec<PinV2>, version: u64 },
}

#[derive(Deserialize)]
struct PinsV1 {
    pins: Vec<PinV1>,
}

#[derive(Deserialize)]
struct PinV1 {
    package: String,
    #[serde(rename = "repositoryURL")]
    repository_url: String,
}

#[derive(Deserialize)]
struct PinV2 {
    identity: String,
    location: String,
}

/// Lookup from package name to repository location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMap {
    /// Lower-cased package name → repository location
    locations: HashMap<String, String>,
}

impl PackageMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(name, location)` pins
    ///
    /// Every pin is reachable by its declared name and by the repository
    /// name in its location. Declared names take precedence.
    pub fn from_pins<'a>(pins: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let pins: Vec<_> = pins.into_iter().collect();
        let mut map = Self::new();

        for (name, location) in &pins {
            map.locations
                .insert(name.to_lowercase(), location.to_string());
        }
        for (_, location) in &pins {
            if let Some(repository) = repository_name(location) {
                map.locations
                    .entry(repository.to_lowercase())
                    .or_insert_with(|| location.to_string());
            }
        }
        map
    }

    /// Parse the contents of a Package.resolved file
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ResolvedError> {
        let file: ResolvedFile = serde_json::from_str(content)
            .map_err(|e| ResolvedError::json_parse_error(path, e.to_string()))?;

        match file {
            ResolvedFile::V1 { object, version: 1 } => Ok(Self::from_pins(
                object
                    .pins
                    .iter()
                    .map(|pin| (pin.package.as_str(), pin.repository_url.as_str())),
            )),
            ResolvedFile::V2 {
                pins,
                version: 2 | 3,
            } => Ok(Self::from_pins(
                pins.iter()
                    .map(|pin| (pin.identity.as_str(), pin.location.as_str())),
            )),
            ResolvedFile::V1 { version, .. } | ResolvedFile::V2 { version, .. } => {
                Err(ResolvedError::unsupported_version(path, version))
            }
        }
    }

    /// Load `Package.resolved` from a package directory
    ///
    /// Returns `Ok(None)` when the directory has no pin file.
    pub fn load(package_dir: &Path) -> Result<Option<Self>, ResolvedError> {
        let path = package_dir.join(RESOLVED_FILENAME);
        if !path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| ResolvedError::read_error(&path, e))?;
        Self::from_json(&content, &path).map(Some)
    }

    /// Number of lookup keys
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if no pins are known
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Repository location of a package, matched case-insensitively
    pub fn location(&self, package_name: &str) -> Option<&str> {
        self.locations
            .get(&package_name.to_lowercase())
            .map(String::as_str)
    }

    /// Release page URL of a package, when its location is a remote repository
    pub fn releases_url(&self, package_name: &str) -> Option<String> {
        self.location(package_name).and_then(releases_url)
    }

    /// Attach release page URLs to parsed updates, keeping their order
    pub fn release_notes(&self, updates: Vec<PackageUpdate>) -> Vec<ReleaseNote> {
        updates
            .into_iter()
            .map(|update| {
                let url = self.releases_url(&update.package_name);
                ReleaseNote::new(update, url)
            })
            .collect()
    }
}

/// Repository name from a location (`https://github.com/vapor/vapor.git` → `vapor`)
pub fn repository_name(location: &str) -> Option<&str> {
    let trimmed = location.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    trimmed
        .rsplit(['/', ':'])
        .next()
        .filter(|name| !name.is_empty())
}

/// Release page URL for a remote repository location
///
/// SSH locations are rewritten to https; local paths yield `None`.
pub fn releases_url(location: &str) -> Option<String> {
    let trimmed = location.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let base = if let Some(rest) = trimmed.strip_prefix("ssh://git@") {
        format!("https://{}", rest)
    } else if let Some(rest) = trimmed.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        format!("https://{}/{}", host, path)
    } else if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        return None;
    };

    Some(format!("{}/releases", base))
}
