//! Command signature parsing.
//!
//! This crate turns a one-line command signature into a
//! [`SignatureResult`]: the command name plus ordered argument and option
//! definitions.
//!
//! ```text
//! greet {name} {--yell=} {--times=1 : Repeat count} {items[]=a,b,c}
//! ^^^^^ name    ^^^^^^^^ option, optional             ^^^^^^^ list argument
//! ```
//!
//! Block grammar: an optional `--` (option), a name, an optional `[]` (list),
//! an optional `=` (optional parameter) followed by a default, and an
//! optional `: description`. Blocks that do not fit are skipped.
//!
//! # Main entry points
//!
//! - [`parse_signature`] — parse with the default scanner backend.
//! - [`SignatureParser`] — reusable parser with a selectable
//!   [`SignatureMatcher`] backend and [`ParserConfig`].
//!
//! # Example
//!
//! ```
//! use command_signature_parser::parse_signature;
//!
//! let signature = parse_signature("greet {name} {--yell=} {--times=1 : Repeat count}").unwrap();
//! assert_eq!(signature.name, "greet");
//! assert_eq!(signature.arguments.len(), 1);
//!
//! let times = signature.find_option("times").unwrap();
//! assert_eq!(times.description.as_deref(), Some("Repeat count"));
//! ```
//!
//! [`SignatureResult`]: command_signature_core::SignatureResult

pub mod config;
pub mod error;
pub mod parser;

use std::sync::LazyLock;

use command_signature_core::SignatureResult;

pub use config::{MatcherKind, ParserConfig};
pub use error::{Result, SignatureError};
pub use parser::{
    Declaration, RegexMatcher, ScanMatcher, SignatureMatcher, SignatureParser, command_name,
    split_description,
};

static DEFAULT_PARSER: LazyLock<SignatureParser> = LazyLock::new(SignatureParser::new);

/// Parses a signature string with the default [`ScanMatcher`] backend.
///
/// # Errors
///
/// Returns an error only on a matcher fault; malformed blocks are skipped.
///
/// # Examples
///
/// ```
/// use command_signature_core::{DefaultValue, Multiplicity};
/// use command_signature_parser::parse_signature;
///
/// let signature = parse_signature("tag {items[]=a,b,c}").unwrap();
/// let items = &signature.arguments[0];
/// assert_eq!(items.multiplicity, Multiplicity::List);
/// assert_eq!(
///     items.default,
///     Some(DefaultValue::List(vec!["a".into(), "b".into(), "c".into()]))
/// );
/// ```
pub fn parse_signature(signature: &str) -> Result<SignatureResult> {
    DEFAULT_PARSER.parse(signature)
}
