//! Parser for the console output of `swift package update`
//!
//! The grammar is assembled from small recognizers, leaf-first:
//! - Lexical primitives (literals, digits, tokens, line handling)
//! - Progress narration lines, which are skipped
//! - Semantic versions and revisions
//! - `+`/`~` change lines
//! - The `N dependencies have changed:` summary line
//! - The update log as a whole
//!
//! Each recognizer takes `&mut &str` and only advances it on success.

mod change;
mod count;
mod lexical;
mod progress;
mod update_log;
mod version;

pub use change::{added, change_line, change_lines, updated};
pub use count::dependency_count;
pub use progress::{progress, progress_line, ProgressLine};
pub use update_log::{change_block, package_updates, ChangeBlock};
pub use version::{revision, semantic_version};

use crate::domain::PackageUpdate;
use crate::error::ParseError;

/// A successfully parsed update log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLog<'a> {
    /// Count announced by the summary line
    pub announced: u64,
    /// Change records in log order
    pub updates: Vec<PackageUpdate>,
    /// Input left after the change block
    pub remainder: &'a str,
}

impl ParsedLog<'_> {
    /// Returns true if as many records were parsed as the log announced
    pub fn is_complete(&self) -> bool {
        self.updates.len() as u64 == self.announced
    }
}

/// Parse the captured output of a dependency update
///
/// Fails only when no dependency count line can be found; the error
/// carries the full output so it can be inspected.
pub fn parse_update_log(output: &str) -> Result<ParsedLog<'_>, ParseError> {
    let mut input = output;
    let block = change_block(&mut input).ok_or_else(|| ParseError::no_count_line(output))?;
    Ok(ParsedLog {
        announced: block.announced,
        updates: block.updates,
        remainder: input,
    })
}
