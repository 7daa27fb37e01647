//! Signature type definitions for command parameter modeling.
//!
//! This module defines the data model produced by parsing a command
//! signature string. The types are designed for serialization with
//! [`serde`] so a host registration layer can consume them directly or
//! through JSON/YAML.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Whether a parameter is a positional argument or a named option.
///
/// Decided by a leading `--` marker on the raw declaration.
///
/// # Examples
///
/// ```
/// use command_signature_core::ParameterKind;
///
/// assert_ne!(ParameterKind::Argument, ParameterKind::Option);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Positional argument (e.g. `{name}`).
    Argument,
    /// Named option (e.g. `{--flag}`).
    Option,
}

/// How many values a parameter accepts.
///
/// Decided by a trailing `[]` marker immediately after the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    /// A single value (the default).
    #[default]
    Single,
    /// An ordered list of values (`name[]`).
    List,
}

/// Whether a parameter must be supplied.
///
/// Decided by an `=` marker after the name (with or without an inline
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Must be supplied (the default).
    #[default]
    Required,
    /// May be omitted (`name=` or `name=value`).
    Optional,
}

/// Default value declared inline after the `=` marker.
///
/// List parameters carry their default as an ordered sequence; single
/// parameters carry the raw text.
///
/// # Examples
///
/// ```
/// use command_signature_core::{DefaultValue, Multiplicity};
///
/// let single = DefaultValue::resolve("a,b", Multiplicity::Single, ',');
/// assert_eq!(single, Some(DefaultValue::Single("a,b".into())));
///
/// let list = DefaultValue::resolve("a,b", Multiplicity::List, ',');
/// assert_eq!(list, Some(DefaultValue::List(vec!["a".into(), "b".into()])));
///
/// assert_eq!(DefaultValue::resolve("", Multiplicity::List, ','), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Raw default of a single-valued parameter.
    Single(String),
    /// Ordered defaults of a list parameter.
    List(Vec<String>),
}

impl DefaultValue {
    /// Resolves the raw text found after `=` into a default value.
    ///
    /// Empty text means no default. For [`Multiplicity::List`] the text is
    /// split on `separator`, keeping order and every item verbatim.
    pub fn resolve(raw: &str, multiplicity: Multiplicity, separator: char) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(match multiplicity {
            Multiplicity::Single => Self::Single(raw.to_string()),
            Multiplicity::List => Self::List(raw.split(separator).map(String::from).collect()),
        })
    }

    /// Returns the single default, if this is one.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the list defaults, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

/// Mode bitmask in the form console hosts expect for argument registration.
///
/// Mirrors the input mode constants of the host console library: exactly one
/// of [`REQUIRED`](InputMode::REQUIRED) or [`OPTIONAL`](InputMode::OPTIONAL),
/// optionally combined with [`IS_ARRAY`](InputMode::IS_ARRAY). The same
/// constants are used for arguments and options.
///
/// # Examples
///
/// ```
/// use command_signature_core::InputMode;
///
/// let mode = InputMode::OPTIONAL | InputMode::IS_ARRAY;
/// assert_eq!(mode.bits(), 6);
/// assert!(mode.contains(InputMode::IS_ARRAY));
/// assert!(!mode.contains(InputMode::REQUIRED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputMode(u8);

impl InputMode {
    /// Value must be supplied.
    pub const REQUIRED: Self = Self(1);
    /// Value may be omitted.
    pub const OPTIONAL: Self = Self(2);
    /// Value collects a list.
    pub const IS_ARRAY: Self = Self(4);

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for InputMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A single parameter declared by a `{...}` block.
///
/// Use the constructors [`argument`](ParameterDefinition::argument) and
/// [`option`](ParameterDefinition::option), then chain builder methods.
///
/// # Examples
///
/// ```
/// use command_signature_core::{DefaultValue, ParameterDefinition, Presence};
///
/// let times = ParameterDefinition::option("times")
///     .optional()
///     .with_default(DefaultValue::Single("1".into()))
///     .with_description("Repeat count");
///
/// assert!(times.is_option());
/// assert_eq!(times.presence, Presence::Optional);
/// assert_eq!(times.description.as_deref(), Some("Repeat count"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Bare name, without the `--` marker.
    pub name: String,
    /// Argument or option.
    pub kind: ParameterKind,
    /// Single value or list.
    pub multiplicity: Multiplicity,
    /// Required or optional.
    pub presence: Presence,
    /// Inline default, if any.
    pub default: Option<DefaultValue>,
    /// Free-text description after the `:` separator.
    pub description: Option<String>,
}

impl ParameterDefinition {
    fn new(name: &str, kind: ParameterKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            multiplicity: Multiplicity::Single,
            presence: Presence::Required,
            default: None,
            description: None,
        }
    }

    /// Creates a required, single-valued positional argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_signature_core::{Multiplicity, ParameterDefinition, Presence};
    ///
    /// let arg = ParameterDefinition::argument("name");
    /// assert!(!arg.is_option());
    /// assert_eq!(arg.presence, Presence::Required);
    /// assert_eq!(arg.multiplicity, Multiplicity::Single);
    /// ```
    pub fn argument(name: &str) -> Self {
        Self::new(name, ParameterKind::Argument)
    }

    /// Creates a required, single-valued option.
    pub fn option(name: &str) -> Self {
        Self::new(name, ParameterKind::Option)
    }

    /// Marks as optional.
    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Marks as accepting a list of values.
    pub fn list(mut self) -> Self {
        self.multiplicity = Multiplicity::List;
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns `true` for named options.
    pub fn is_option(&self) -> bool {
        self.kind == ParameterKind::Option
    }

    /// Returns `true` when the parameter may be omitted.
    pub fn is_optional(&self) -> bool {
        self.presence == Presence::Optional
    }

    /// Returns `true` for list parameters.
    pub fn is_list(&self) -> bool {
        self.multiplicity == Multiplicity::List
    }

    /// Returns the host mode bitmask for this parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_signature_core::{InputMode, ParameterDefinition};
    ///
    /// let items = ParameterDefinition::argument("items").optional().list();
    /// assert_eq!(items.input_mode(), InputMode::OPTIONAL | InputMode::IS_ARRAY);
    ///
    /// let name = ParameterDefinition::argument("name");
    /// assert_eq!(name.input_mode(), InputMode::REQUIRED);
    /// ```
    pub fn input_mode(&self) -> InputMode {
        let mode = match self.presence {
            Presence::Required => InputMode::REQUIRED,
            Presence::Optional => InputMode::OPTIONAL,
        };
        match self.multiplicity {
            Multiplicity::Single => mode,
            Multiplicity::List => mode | InputMode::IS_ARRAY,
        }
    }
}

/// Parsed form of a complete signature string.
///
/// Built fresh for every parse; it holds no reference to the input.
///
/// # Examples
///
/// ```
/// use command_signature_core::{ParameterDefinition, SignatureResult};
///
/// let mut signature = SignatureResult::new("greet");
/// signature.arguments.push(ParameterDefinition::argument("name"));
/// signature.options.push(ParameterDefinition::option("yell").optional());
///
/// assert!(signature.find_argument("name").is_some());
/// assert!(signature.find_option("yell").is_some());
/// assert!(signature.find_option("name").is_none());
/// assert_eq!(signature.parameters().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureResult {
    /// Command name, taken verbatim from the first space-separated word.
    pub name: String,
    /// Positional arguments in declaration order.
    pub arguments: Vec<ParameterDefinition>,
    /// Options in declaration order.
    pub options: Vec<ParameterDefinition>,
}

impl SignatureResult {
    /// Creates a result with no parameters.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Appends a parameter to the list matching its kind.
    pub fn push(&mut self, parameter: ParameterDefinition) {
        match parameter.kind {
            ParameterKind::Argument => self.arguments.push(parameter),
            ParameterKind::Option => self.options.push(parameter),
        }
    }

    /// Finds an argument by name.
    pub fn find_argument(&self, name: &str) -> Option<&ParameterDefinition> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Finds an option by name (without the `--` marker).
    pub fn find_option(&self, name: &str) -> Option<&ParameterDefinition> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Iterates arguments first, then options.
    pub fn parameters(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.arguments.iter().chain(self.options.iter())
    }

    /// Returns `true` when the signature declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.options.is_empty()
    }
}
