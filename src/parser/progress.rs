//! Progress narration recognizer
//!
//! While resolving, the package manager narrates what it is doing:
//! - `Updating <url>`
//! - `Updated <url> (<duration>s)`
//! - `Computing version for <url>`
//! - `Computed <url> at <version> (<duration>s)`
//! - `Creating working copy for <url>`
//! - `Working copy of <url> resolved at <version>`
//!
//! These lines carry nothing we need and are consumed whole.

use super::lexical::{attempt, end_of_line, matched};
use regex::Regex;
use std::sync::LazyLock;

/// The shape of a recognized progress line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLine {
    Updating,
    Updated,
    ComputingVersion,
    Computed,
    CreatingWorkingCopy,
    WorkingCopyResolved,
}

static SHAPES: LazyLock<[(ProgressLine, Regex); 6]> = LazyLock::new(|| {
    [
        (ProgressLine::Updating, r"^Updating \S+"),
        (ProgressLine::Updated, r"^Updated \S+ \(\d+(?:\.\d+)?s\)"),
        (ProgressLine::ComputingVersion, r"^Computing version for \S+"),
        (ProgressLine::Computed, r"^Computed \S+ at \S+ \(\d+(?:\.\d+)?s\)"),
        (ProgressLine::CreatingWorkingCopy, r"^Creating working copy for \S+"),
        (ProgressLine::WorkingCopyResolved, r"^Working copy of \S+ resolved at \S+"),
    ]
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
});

/// Recognize one progress line, consuming its line terminator
pub fn progress_line(input: &mut &str) -> Option<ProgressLine> {
    SHAPES.iter().find_map(|(kind, re)| {
        attempt(input, |i| {
            matched(i, re)?;
            end_of_line(i)?;
            Some(*kind)
        })
    })
}

/// Consume any number of consecutive progress lines
///
/// Never fails; returns how many lines were consumed.
pub fn progress(input: &mut &str) -> usize {
    let mut count = 0;
    while !input.is_empty() && progress_line(input).is_some() {
        count += 1;
    }
    count
}
