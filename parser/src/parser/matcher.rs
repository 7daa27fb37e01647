//! Pluggable grammar backends for signature parsing.

use crate::error::Result;

/// Markers recognized in a parameter declaration (the text left of `:`).
///
/// Grammar, in order: optional `--`, name, optional `[]`, optional `=`
/// followed by a raw default. All fields borrow from the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Declaration<'a> {
    /// Leading `--` was present.
    pub option_marker: bool,
    /// Bare name.
    pub name: &'a str,
    /// `[]` followed the name.
    pub list_marker: bool,
    /// `=` followed the name (or the `[]` marker).
    pub default_marker: bool,
    /// Text after `=`, possibly empty.
    pub raw_default: &'a str,
}

/// Grammar backend used by [`SignatureParser`](crate::SignatureParser).
///
/// A matcher provides the two independent views of a signature: the `{...}`
/// block contents, and the marker analysis of a single declaration.
/// Implementations must be stateless between calls so one parser can be
/// shared across threads.
pub trait SignatureMatcher: Send + Sync {
    /// Short backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Returns the contents of every `{...}` pair, left to right.
    ///
    /// Pairs are non-greedy (the first `}` closes the block) and never span a
    /// newline.
    fn blocks<'s>(&self, signature: &'s str) -> Result<Vec<&'s str>>;

    /// Analyzes a trimmed declaration.
    ///
    /// `Ok(None)` means the declaration does not have the expected shape; the
    /// caller drops the block. `Err` is reserved for matcher faults.
    fn declaration<'d>(&self, text: &'d str) -> Result<Option<Declaration<'d>>>;
}
