//! Signature parser.
//!
//! A signature is read through two independent views of the same string:
//!
//! - the command name is the first word of a split on single spaces;
//! - parameters come from every `{...}` block of the unsplit string, so
//!   blocks may contain spaces (descriptions, defaults).
//!
//! Each block is split on `:` into a declaration and an optional
//! description, the declaration is run through a [`SignatureMatcher`], and the
//! result is appended to the arguments or the options. Blocks whose
//! declaration does not match are dropped without error.

mod matcher;
mod pattern;
mod scan;

use std::fmt;

use command_signature_core::{DefaultValue, Multiplicity, ParameterDefinition, Presence, SignatureResult};
use tracing::{debug, trace};

use crate::config::{MatcherKind, ParserConfig};
use crate::error::Result;

pub use matcher::{Declaration, SignatureMatcher};
pub use pattern::RegexMatcher;
pub use scan::{
    ScanMatcher, scan_blocks, scan_default_marker, scan_list_marker, scan_name,
    strip_option_marker,
};

/// Parser for command signature strings.
///
/// Immutable after construction; one instance can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use command_signature_parser::SignatureParser;
///
/// let parser = SignatureParser::new();
/// let signature = parser.parse("greet {name} {--yell=}").unwrap();
///
/// assert_eq!(signature.name, "greet");
/// assert_eq!(signature.arguments[0].name, "name");
/// assert_eq!(signature.options[0].name, "yell");
/// ```
pub struct SignatureParser {
    matcher: Box<dyn SignatureMatcher>,
    list_separator: char,
}

impl SignatureParser {
    /// Creates a parser using the [`ScanMatcher`] and `,` as list separator.
    pub fn new() -> Self {
        Self::with_matcher(ScanMatcher)
    }

    /// Creates a parser using the given matcher backend.
    pub fn with_matcher(matcher: impl SignatureMatcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
            list_separator: ',',
        }
    }

    /// Creates a parser from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Pattern`](crate::SignatureError::Pattern) if the regex
    /// backend is selected and its patterns fail to compile.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        let parser = match config.matcher {
            MatcherKind::Scan => Self::with_matcher(ScanMatcher),
            MatcherKind::Regex => Self::with_matcher(RegexMatcher::new()?),
        };
        Ok(parser.with_list_separator(config.list_separator))
    }

    /// Sets the separator used to split list defaults.
    pub fn with_list_separator(mut self, separator: char) -> Self {
        self.list_separator = separator;
        self
    }

    /// Name of the matcher backend in use.
    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    /// Parses a signature string.
    ///
    /// Malformed or empty input never fails: the name may be empty and
    /// malformed blocks are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error only when the matcher itself faults.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_signature_parser::SignatureParser;
    ///
    /// let signature = SignatureParser::new().parse("noop {} {--}").unwrap();
    /// assert_eq!(signature.name, "noop");
    /// assert!(signature.is_empty());
    /// ```
    pub fn parse(&self, signature: &str) -> Result<SignatureResult> {
        let mut result = SignatureResult::new(command_name(signature));
        let blocks = self.matcher.blocks(signature)?;
        debug!(
            command = %result.name,
            blocks = blocks.len(),
            matcher = self.matcher.name(),
            "Parsing signature"
        );

        for block in blocks {
            match self.parse_block(block)? {
                Some(parameter) => {
                    trace!(name = %parameter.name, kind = ?parameter.kind, "Parsed parameter");
                    result.push(parameter);
                }
                None => debug!(block, "Skipping malformed parameter block"),
            }
        }

        Ok(result)
    }

    fn parse_block(&self, block: &str) -> Result<Option<ParameterDefinition>> {
        let (declaration, description) = split_description(block);
        let declaration = declaration.trim();
        let Some(parsed) = self.matcher.declaration(declaration)? else {
            return Ok(None);
        };

        let mut parameter = if declaration.starts_with("--") {
            ParameterDefinition::option(parsed.name)
        } else {
            ParameterDefinition::argument(parsed.name)
        };
        if parsed.list_marker {
            parameter.multiplicity = Multiplicity::List;
        }
        if parsed.default_marker {
            parameter.presence = Presence::Optional;
        }
        parameter.default =
            DefaultValue::resolve(parsed.raw_default.trim(), parameter.multiplicity, self.list_separator);
        parameter.description = description.map(String::from);

        Ok(Some(parameter))
    }
}

impl Default for SignatureParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SignatureParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureParser")
            .field("matcher", &self.matcher.name())
            .field("list_separator", &self.list_separator)
            .finish()
    }
}

/// Returns the command name: the text before the first space, verbatim.
///
/// # Examples
///
/// ```
/// use command_signature_parser::command_name;
///
/// assert_eq!(command_name("greet {name}"), "greet");
/// assert_eq!(command_name(""), "");
/// assert_eq!(command_name(" leading"), "");
/// ```
pub fn command_name(signature: &str) -> &str {
    signature.split(' ').next().unwrap_or_default()
}

/// Splits a block into its declaration and description.
///
/// The description is kept only when the block splits on `:` into exactly two
/// parts and the second part is not blank; it is returned trimmed. The
/// declaration is always the text before the first `:`.
///
/// # Examples
///
/// ```
/// use command_signature_parser::split_description;
///
/// assert_eq!(split_description("name : Your name"), ("name ", Some("Your name")));
/// assert_eq!(split_description("name:a:b:c"), ("name", None));
/// assert_eq!(split_description("name:  "), ("name", None));
/// ```
pub fn split_description(block: &str) -> (&str, Option<&str>) {
    let mut parts = block.split(':');
    let declaration = parts.next().unwrap_or_default();
    let description = match (parts.next(), parts.next()) {
        (Some(text), None) => Some(text.trim()).filter(|text| !text.is_empty()),
        _ => None,
    };
    (declaration, description)
}
