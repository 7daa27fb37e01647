//! Regular-expression backend.
//!
//! Expresses the same grammar as [`ScanMatcher`](super::ScanMatcher) with the
//! `regex` crate. Kept as an alternative backend and as a cross-check for the
//! scanner.

use regex::Regex;

use super::matcher::{Declaration, SignatureMatcher};
use crate::error::{Result, SignatureError};

/// Non-greedy `{...}` pairs; `.` does not cross newlines.
const BLOCK_PATTERN: &str = r"\{(.*?)\}";

/// `--`? name `[]`? (`=` default)?
const DECLARATION_PATTERN: &str = r"(?s)^(--)?([A-Za-z][A-Za-z0-9_-]*)(\[\])?(?:(=)(.*))?$";

/// Matcher backed by compiled regular expressions.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    block: Regex,
    declaration: Regex,
}

impl RegexMatcher {
    /// Compiles the block and declaration patterns.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Pattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::from_patterns(BLOCK_PATTERN, DECLARATION_PATTERN)
    }

    pub(crate) fn from_patterns(block: &str, declaration: &str) -> Result<Self> {
        Ok(Self {
            block: Regex::new(block)?,
            declaration: Regex::new(declaration)?,
        })
    }
}

impl SignatureMatcher for RegexMatcher {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn blocks<'s>(&self, signature: &'s str) -> Result<Vec<&'s str>> {
        self.block
            .captures_iter(signature)
            .map(|caps| {
                caps.get(1)
                    .map(|m| m.as_str())
                    .ok_or_else(|| SignatureError::Internal("block match without contents".into()))
            })
            .collect()
    }

    fn declaration<'d>(&self, text: &'d str) -> Result<Option<Declaration<'d>>> {
        let Some(caps) = self.declaration.captures(text) else {
            return Ok(None);
        };
        let name = caps
            .get(2)
            .map(|m| m.as_str())
            .ok_or_else(|| SignatureError::Internal(format!("no name captured in {text:?}")))?;

        Ok(Some(Declaration {
            option_marker: caps.get(1).is_some(),
            name,
            list_marker: caps.get(3).is_some(),
            default_marker: caps.get(4).is_some(),
            raw_default: caps.get(5).map_or("", |m| m.as_str()),
        }))
    }
}
