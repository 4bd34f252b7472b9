//! Semantic version and revision grammars
//!
//! - `DIGITS "." DIGITS "." DIGITS ["-" PRERELEASE] ["+" BUILD]`
//! - a revision is either such a version (a tag) or a bare token (a branch)

use super::lexical::{at_token_boundary, attempt, matched, token};
use crate::domain::{Revision, SemanticVersion};
use regex::Regex;
use std::sync::LazyLock;

static SEMANTIC_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
    )
    .unwrap()
});

/// Recognize a semantic version at the current position
///
/// Stops at the first character that cannot extend the version, so
/// `"1.2.3 -> ..."` yields `1.2.3` and leaves `" -> ..."`.
pub fn semantic_version(input: &mut &str) -> Option<SemanticVersion> {
    attempt(input, |i| {
        let caps = matched(i, &SEMANTIC_VERSION_RE)?;
        let identifiers = |index: usize| -> Vec<String> {
            caps.get(index)
                .map(|m| m.as_str().split('.').map(str::to_string).collect())
                .unwrap_or_default()
        };

        Some(
            SemanticVersion::new(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
                .with_pre_release(identifiers(4))
                .with_build_metadata(identifiers(5)),
        )
    })
}

/// Recognize a revision: a version tag, or failing that a branch name
///
/// A version must end at a token boundary to count as a tag; `1.2.3abc` is
/// a branch named `1.2.3abc`. Fails only when there is no token at all.
pub fn revision(input: &mut &str) -> Option<Revision> {
    attempt(input, |i| {
        let version = semantic_version(i)?;
        at_token_boundary(i).then_some(Revision::Tag(version))
    })
    .or_else(|| token(input).map(Revision::branch))
}
