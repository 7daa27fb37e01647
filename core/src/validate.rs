//! Signature definition linting.
//!
//! Checks a parsed [`SignatureResult`] against the structural rules a console
//! host enforces when registering parameters: unique names per kind, no
//! required argument after an optional one, and nothing after a list
//! argument. Parsing itself never calls this; it stays lenient.
//!
//! # Examples
//!
//! ```
//! use command_signature_core::*;
//!
//! let mut signature = SignatureResult::new("greet");
//! signature.arguments.push(ParameterDefinition::argument("name"));
//! assert!(validate_signature(&signature).is_empty());
//!
//! // Required argument after an optional one
//! signature.arguments.insert(0, ParameterDefinition::argument("greeting").optional());
//! assert!(!validate_signature(&signature).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{ParameterDefinition, SignatureResult};

/// Signature lint errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty or whitespace-only.
    #[error("signature command name cannot be empty")]
    EmptyCommandName,
    /// Two arguments share a name.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),
    /// Two options share a name.
    #[error("duplicate option: --{0}")]
    DuplicateOption(String),
    /// A required argument is declared after an optional one.
    #[error("required argument after an optional one: {0}")]
    RequiredAfterOptional(String),
    /// An argument is declared after a list argument.
    #[error("argument declared after a list argument: {0}")]
    ArgumentAfterList(String),
}

/// Lints a parsed signature.
///
/// Returns every problem found, in declaration order. An empty command name
/// stops further checks.
///
/// # Examples
///
/// ```
/// use command_signature_core::*;
///
/// let mut signature = SignatureResult::new("copy");
/// signature.arguments.push(ParameterDefinition::argument("sources").list());
/// signature.arguments.push(ParameterDefinition::argument("dest"));
///
/// assert_eq!(
///     validate_signature(&signature),
///     vec![ValidationError::ArgumentAfterList("dest".into())]
/// );
/// ```
pub fn validate_signature(signature: &SignatureResult) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if signature.name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    errors.extend(validate_arguments(&signature.arguments));
    errors.extend(
        duplicate_names(&signature.options)
            .into_iter()
            .map(ValidationError::DuplicateOption),
    );

    errors
}

fn validate_arguments(arguments: &[ParameterDefinition]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = duplicate_names(arguments)
        .into_iter()
        .map(ValidationError::DuplicateArgument)
        .collect();

    let mut seen_optional = false;
    let mut seen_list = false;
    for argument in arguments {
        if seen_list {
            errors.push(ValidationError::ArgumentAfterList(argument.name.clone()));
        } else if seen_optional && !argument.is_optional() {
            errors.push(ValidationError::RequiredAfterOptional(argument.name.clone()));
        }
        seen_optional |= argument.is_optional();
        seen_list |= argument.is_list();
    }

    errors
}

fn duplicate_names(parameters: &[ParameterDefinition]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    let mut duplicates = Vec::new();

    for parameter in parameters {
        let name = parameter.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name.to_string());
        }
    }

    duplicates
}
