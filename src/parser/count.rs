//! Dependency count grammar
//!
//! `<N> dependency has changed:`, `<N> dependencies have changed:` or
//! `<N> dependencies have changed.` The wording is taken as printed; it is
//! not checked against N.

use super::lexical::{attempt, matched};
use regex::Regex;
use std::sync::LazyLock;

static DEPENDENCY_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+) (?:dependency has|dependencies have) changed[:.]").unwrap()
});

/// Recognize the summary line, yielding the announced count
///
/// The line terminator is not consumed.
pub fn dependency_count(input: &mut &str) -> Option<u64> {
    attempt(input, |i| {
        let caps = matched(i, &DEPENDENCY_COUNT_RE)?;
        caps[1].parse().ok()
    })
}
