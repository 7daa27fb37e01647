//! Core signature types and definition linting.
//!
//! This crate defines the data model produced by parsing a compact command
//! signature such as `greet {name} {--times=1 : Repeat count}`:
//!
//! - [`SignatureResult`] — command name plus ordered arguments and options.
//! - [`ParameterDefinition`] — one `{...}` block: name, [`ParameterKind`],
//!   [`Multiplicity`], [`Presence`], optional [`DefaultValue`] and
//!   description.
//! - [`InputMode`] — the mode bitmask console hosts use when registering a
//!   parameter.
//!
//! Linting ([`validate_signature`]) catches definitions a host would reject,
//! such as duplicate names or a required argument after an optional one.
//!
//! # Example
//!
//! ```
//! use command_signature_core::*;
//!
//! let mut signature = SignatureResult::new("greet");
//! signature.arguments.push(ParameterDefinition::argument("name"));
//! signature.options.push(
//!     ParameterDefinition::option("times")
//!         .optional()
//!         .with_default(DefaultValue::Single("1".into()))
//!         .with_description("Repeat count"),
//! );
//!
//! assert_eq!(signature.find_option("times").unwrap().input_mode(), InputMode::OPTIONAL);
//! assert!(validate_signature(&signature).is_empty());
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{ValidationError, validate_signature};
