//! Lexical primitives shared by the update log grammars
//!
//! Every recognizer takes the remaining input as `&mut &str` and advances it
//! only when it succeeds. A failed recognizer leaves the input untouched, so
//! callers can try an alternative without rewinding by hand.

use regex::{Captures, Regex};

/// Run `parser`, restoring the input if it fails
pub fn attempt<'a, T>(
    input: &mut &'a str,
    parser: impl FnOnce(&mut &'a str) -> Option<T>,
) -> Option<T> {
    let start = *input;
    let result = parser(input);
    if result.is_none() {
        *input = start;
    }
    result
}

/// Match an exact literal
pub fn literal<'a>(input: &mut &'a str, expected: &str) -> Option<()> {
    let text: &'a str = *input;
    *input = text.strip_prefix(expected)?;
    Some(())
}

/// Match one or more ASCII digits
pub fn digits<'a>(input: &mut &'a str) -> Option<&'a str> {
    take_while1(input, |c| c.is_ascii_digit())
}

/// Match a run of characters that is not whitespace
pub fn token<'a>(input: &mut &'a str) -> Option<&'a str> {
    take_while1(input, |c| !c.is_whitespace())
}

/// Match everything up to the end of the current line
///
/// Never fails. The line terminator (`\n` or `\r\n`) is left in place.
pub fn rest_of_line<'a>(input: &mut &'a str) -> &'a str {
    let text: &'a str = *input;
    let mut end = text.find('\n').unwrap_or(text.len());
    if text[..end].ends_with('\r') {
        end -= 1;
    }
    let (line, rest) = text.split_at(end);
    *input = rest;
    line
}

/// Match a line terminator
pub fn line_ending(input: &mut &str) -> Option<()> {
    literal(input, "\n").or_else(|| literal(input, "\r\n"))
}

/// Match a line terminator or the end of input
pub fn end_of_line(input: &mut &str) -> Option<()> {
    if input.is_empty() {
        return Some(());
    }
    line_ending(input)
}

/// Returns true if the input is exhausted or continues with whitespace
pub fn at_token_boundary(input: &str) -> bool {
    input.chars().next().is_none_or(char::is_whitespace)
}

/// Consume the current line including its terminator
///
/// Returns false only when there is nothing left to consume.
pub fn skip_line(input: &mut &str) -> bool {
    if input.is_empty() {
        return false;
    }
    rest_of_line(input);
    line_ending(input);
    true
}

/// Match a regex anchored at the current position
pub fn matched<'a>(input: &mut &'a str, re: &Regex) -> Option<Captures<'a>> {
    let text: &'a str = *input;
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 {
        return None;
    }
    *input = &text[whole.end()..];
    Some(caps)
}

/// Match zero or more `item`s separated by `separator`
///
/// A separator is only consumed when the item after it also matches.
pub fn separated<'a, T>(
    input: &mut &'a str,
    mut item: impl FnMut(&mut &'a str) -> Option<T>,
    mut separator: impl FnMut(&mut &'a str) -> Option<()>,
) -> Vec<T> {
    let mut items = Vec::new();
    let Some(first) = item(input) else {
        return items;
    };
    items.push(first);

    loop {
        let next = attempt(input, |i| {
            separator(i)?;
            item(i)
        });
        match next {
            Some(value) => items.push(value),
            None => break,
        }
    }
    items
}

fn take_while1<'a>(input: &mut &'a str, accept: impl Fn(char) -> bool) -> Option<&'a str> {
    let text: &'a str = *input;
    let end = text.find(|c: char| !accept(c)).unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    let (head, tail) = text.split_at(end);
    *input = tail;
    Some(head)
}
