//! Top-level update log grammar
//!
//! Skips whatever precedes the dependency count line (banners, warnings,
//! progress narration, stray `~`/`+` lines), reads the count, then collects
//! the change block that follows it.

use super::change::change_lines;
use super::count::dependency_count;
use super::lexical::{attempt, line_ending, skip_line};
use super::progress::progress;
use crate::domain::PackageUpdate;

/// The count line and the change block that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBlock {
    /// Count announced by the summary line
    pub announced: u64,
    /// Change records in log order
    pub updates: Vec<PackageUpdate>,
}

/// Advance line by line until a dependency count line is found
fn seek_dependency_count(input: &mut &str) -> Option<u64> {
    loop {
        progress(input);
        if let Some(count) = dependency_count(input) {
            return Some(count);
        }
        // Each iteration consumes at least one line, so this terminates
        if !skip_line(input) {
            return None;
        }
    }
}

/// Recognize a complete update log
///
/// The number of records is however many valid change lines follow the
/// count line; the announced count is reported but not enforced.
pub fn change_block(input: &mut &str) -> Option<ChangeBlock> {
    attempt(input, |i| {
        let announced = seek_dependency_count(i)?;
        if announced == 0 {
            return Some(ChangeBlock {
                announced,
                updates: Vec::new(),
            });
        }

        let updates = attempt(i, |block| {
            line_ending(block)?;
            let updates = change_lines(block);
            (!updates.is_empty()).then_some(updates)
        })
        .unwrap_or_default();

        Some(ChangeBlock { announced, updates })
    })
}

/// Recognize a complete update log, yielding only the change records
pub fn package_updates(input: &mut &str) -> Option<Vec<PackageUpdate>> {
    change_block(input).map(|block| block.updates)
}
