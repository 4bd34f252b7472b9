//! JSON output formatter for machine processing

use crate::domain::Revision;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Count announced by the update log
    announced: u64,
    /// Changed dependencies in log order
    updates: Vec<JsonUpdate<'a>>,
    /// Warnings (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// JSON representation of a changed dependency
#[derive(Serialize)]
struct JsonUpdate<'a> {
    /// Package name
    package: &'a str,
    /// Revision before the update, null for new packages
    old_revision: Option<&'a Revision>,
    /// Whether the package was added by the update
    new_package: bool,
    /// Release page URL, if known
    releases_url: Option<&'a str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let warnings = if self.verbosity == Verbosity::Verbose {
            result.warnings.iter().map(|w| w.to_string()).collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            announced: result.announced,
            updates: result
                .notes
                .iter()
                .map(|note| JsonUpdate {
                    package: &note.package_name,
                    old_revision: note.old_revision.as_ref(),
                    new_package: note.is_new_package(),
                    releases_url: note.releases_url.as_deref(),
                })
                .collect(),
            warnings,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PackageUpdate, ReleaseNote, SemanticVersion};
    use crate::orchestrator::OrchestratorWarning;
    use serde_json::{json, Value};

    fn create_test_result() -> OrchestratorResult {
        OrchestratorResult {
            announced: 3,
            notes: vec![
                ReleaseNote::new(
                    PackageUpdate::updated("vapor", SemanticVersion::new(4, 54, 0).into()),
                    Some("https://github.com/vapor/vapor/releases".to_string()),
                ),
                ReleaseNote::new(PackageUpdate::added("swift-collections"), None),
            ],
            warnings: vec![OrchestratorWarning::CountMismatch {
                announced: 3,
                parsed: 2,
            }],
        }
    }

    fn render(verbosity: Verbosity) -> Value {
        let mut output = Vec::new();
        JsonFormatter::new(verbosity)
            .format(&create_test_result(), &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_format_updates() {
        let value = render(Verbosity::Normal);
        assert_eq!(
            value,
            json!({
                "announced": 3,
                "updates": [
                    {
                        "package": "vapor",
                        "old_revision": { "kind": "tag", "value": "4.54.0" },
                        "new_package": false,
                        "releases_url": "https://github.com/vapor/vapor/releases"
                    },
                    {
                        "package": "swift-collections",
                        "old_revision": null,
                        "new_package": true,
                        "releases_url": null
                    }
                ]
            })
        );
    }

    #[test]
    fn test_format_verbose_includes_warnings() {
        let value = render(Verbosity::Verbose);
        let warnings = value["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].as_str().unwrap().contains("announced 3"));
    }
}
