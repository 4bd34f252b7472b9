//! Change-line grammar
//!
//! Two shapes follow the dependency count line:
//! - `+ <name> <version>` for a newly added dependency
//! - `~ <name> <old revision> -> <name> <new revision...>` for a changed one
//!
//! The new revision, including any `Revision(identifier: "...")` detail, is
//! consumed and discarded.

use super::lexical::{attempt, line_ending, literal, rest_of_line, separated, token};
use super::version::revision;
use crate::domain::PackageUpdate;

/// Recognize an added dependency line
pub fn added(input: &mut &str) -> Option<PackageUpdate> {
    attempt(input, |i| {
        literal(i, "+ ")?;
        let name = token(i)?;
        literal(i, " ")?;
        non_blank(rest_of_line(i))?;
        Some(PackageUpdate::added(name))
    })
}

/// Recognize a changed dependency line
pub fn updated(input: &mut &str) -> Option<PackageUpdate> {
    attempt(input, |i| {
        literal(i, "~ ")?;
        let name = token(i)?;
        literal(i, " ")?;
        let old_revision = revision(i)?;
        literal(i, " -> ")?;
        // The repeated name is not checked against the first one
        token(i)?;
        literal(i, " ")?;
        non_blank(rest_of_line(i))?;
        Some(PackageUpdate::updated(name, old_revision))
    })
}

/// Recognize either kind of change line, dispatching on its marker
///
/// The line terminator is not consumed.
pub fn change_line(input: &mut &str) -> Option<PackageUpdate> {
    match input.chars().next()? {
        '+' => added(input),
        '~' => updated(input),
        _ => None,
    }
}

/// Recognize consecutive newline-separated change lines, in order
///
/// Stops before the first line that is not a change line.
pub fn change_lines(input: &mut &str) -> Vec<PackageUpdate> {
    separated(input, change_line, line_ending)
}

fn non_blank(text: &str) -> Option<&str> {
    (!text.trim().is_empty()).then_some(text)
}
