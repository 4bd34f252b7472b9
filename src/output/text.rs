//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per changed dependency with its releases URL
//! - Colored new-package and revision markers
//! - An announced/listed summary in verbose mode

use crate::domain::ReleaseNote;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Header printed above the list in normal and verbose mode
const HEADER: &str = "Release notes URLs (updating from):";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a single release note line
    fn format_note(&self, note: &ReleaseNote, writer: &mut dyn Write) -> std::io::Result<()> {
        let from = format!("({})", note.updating_from());
        if !self.color {
            return writeln!(writer, "{} {}", note.link_or_name(), from);
        }

        let link = match note.releases_url {
            Some(ref url) => url.cyan().to_string(),
            None => note.package_name.bold().to_string(),
        };
        let from = if note.is_new_package() {
            from.green().to_string()
        } else {
            from.dimmed().to_string()
        };
        writeln!(writer, "{} {}", link, from)
    }

    /// Summary line shown in verbose mode
    fn format_summary(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let new_packages = result.notes.iter().filter(|n| n.is_new_package()).count();
        let summary = format!(
            "{} announced, {} listed, {} new",
            result.announced,
            result.notes.len(),
            new_packages
        );
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}", summary.dimmed())
        } else {
            writeln!(writer, "{}", summary)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if result.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                writeln!(writer, "No dependency changes.")?;
            }
            return Ok(());
        }

        if self.verbosity != Verbosity::Quiet {
            if self.color {
                writeln!(writer, "{}", HEADER.bold())?;
            } else {
                writeln!(writer, "{}", HEADER)?;
            }
        }

        for note in &result.notes {
            self.format_note(note, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_summary(result, writer)?;
        }

        Ok(())
    }
}
