//! Hand-written scanner backend.
//!
//! Each marker of the declaration grammar has its own routine so it can be
//! checked in isolation; [`ScanMatcher`] chains them.

use super::matcher::{Declaration, SignatureMatcher};
use crate::error::Result;

/// Default matcher: a forward scan over the declaration markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanMatcher;

impl SignatureMatcher for ScanMatcher {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn blocks<'s>(&self, signature: &'s str) -> Result<Vec<&'s str>> {
        Ok(scan_blocks(signature))
    }

    fn declaration<'d>(&self, text: &'d str) -> Result<Option<Declaration<'d>>> {
        let (option_marker, rest) = strip_option_marker(text);
        let Some((name, rest)) = scan_name(rest) else {
            return Ok(None);
        };
        let (list_marker, rest) = scan_list_marker(rest);
        let Some((default_marker, raw_default)) = scan_default_marker(rest) else {
            return Ok(None);
        };

        Ok(Some(Declaration {
            option_marker,
            name,
            list_marker,
            default_marker,
            raw_default,
        }))
    }
}

/// Returns the contents of every non-greedy `{...}` pair in `signature`.
///
/// A `{` whose closing `}` would lie past a newline opens nothing; scanning
/// resumes right after it.
pub fn scan_blocks(signature: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(open) = signature[cursor..].find('{') {
        let start = cursor + open + 1;
        let tail = &signature[start..];
        match tail.find(['}', '\n']) {
            Some(end) if tail[end..].starts_with('}') => {
                blocks.push(&tail[..end]);
                cursor = start + end + 1;
            }
            _ => cursor = start,
        }
    }

    blocks
}

/// Consumes a leading `--`.
pub fn strip_option_marker(text: &str) -> (bool, &str) {
    match text.strip_prefix("--") {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

/// Splits a leading name off `text`.
///
/// A name starts with an ASCII letter and continues with ASCII letters,
/// digits, `_` or `-`. Returns `None` when `text` does not start with one.
pub fn scan_name(text: &str) -> Option<(&str, &str)> {
    let first = text.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let end = text
        .char_indices()
        .find(|&(_, ch)| !is_name_char(ch))
        .map_or(text.len(), |(idx, _)| idx);
    Some(text.split_at(end))
}

/// Consumes a leading `[]`.
pub fn scan_list_marker(text: &str) -> (bool, &str) {
    match text.strip_prefix("[]") {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

/// Reads the optional `=` marker and the raw default after it.
///
/// Anything other than nothing or `=...` is left over, which makes the
/// declaration malformed (`None`).
pub fn scan_default_marker(text: &str) -> Option<(bool, &str)> {
    if text.is_empty() {
        return Some((false, ""));
    }
    text.strip_prefix('=').map(|raw| (true, raw))
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}
