//! Markdown output formatter
//!
//! Produces a bullet list suitable for a pull request description.

use crate::domain::ReleaseNote;
use crate::orchestrator::OrchestratorResult;
use crate::output::OutputFormatter;
use std::io::Write;

/// Markdown formatter for pull request descriptions
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Render one bullet, linking the name when a releases URL is known
    fn format_note(&self, note: &ReleaseNote) -> String {
        let name = match note.releases_url {
            Some(ref url) => format!("[{}]({})", escape(&note.package_name), url),
            None => escape(&note.package_name),
        };
        match note.old_revision {
            Some(ref revision) => format!("- {} from {}", name, escape(&revision.to_string())),
            None => format!("- {} (new package)", name),
        }
    }
}

/// Escape characters that would otherwise start markdown emphasis or links
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '[' | ']' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "### Dependency updates")?;
        writeln!(writer)?;

        if result.is_empty() {
            return writeln!(writer, "No dependency changes.");
        }

        for note in &result.notes {
            writeln!(writer, "{}", self.format_note(note))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PackageUpdate, Revision, SemanticVersion};

    fn render(result: &OrchestratorResult) -> String {
        let mut output = Vec::new();
        MarkdownFormatter::new().format(result, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_format_list() {
        let result = OrchestratorResult {
            announced: 3,
            notes: vec![
                ReleaseNote::new(
                    PackageUpdate::updated("vapor", SemanticVersion::new(4, 54, 0).into()),
                    Some("https://github.com/vapor/vapor/releases".to_string()),
                ),
                ReleaseNote::new(PackageUpdate::updated("leaf", Revision::branch("main")), None),
                ReleaseNote::new(PackageUpdate::added("swift-collections"), None),
            ],
            warnings: Vec::new(),
        };

        assert_eq!(
            render(&result),
            "### Dependency updates\n\
             \n\
             - [vapor](https://github.com/vapor/vapor/releases) from 4.54.0\n\
             - leaf from main\n\
             - swift-collections (new package)\n"
        );
    }

    #[test]
    fn test_format_empty() {
        let result = OrchestratorResult {
            announced: 0,
            notes: Vec::new(),
            warnings: Vec::new(),
        };
        assert!(render(&result).ends_with("No dependency changes.\n"));
    }

    #[test]
    fn test_format_escapes_branch_revision() {
        let note = ReleaseNote::new(
            PackageUpdate::updated("leaf", Revision::branch("feature_x_y")),
            None,
        );
        assert_eq!(
            MarkdownFormatter::new().format_note(&note),
            "- leaf from feature\\_x\\_y"
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("swift-nio"), "swift-nio");
        assert_eq!(escape("my_package"), "my\\_package");
    }
}
