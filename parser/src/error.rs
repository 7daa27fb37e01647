//! Error types for signature parsing.
//!
//! Malformed `{...}` blocks are not errors; they are dropped from the result.
//! Only matcher faults and configuration I/O surface here.

use thiserror::Error;

/// Errors that can occur while parsing a signature or loading configuration.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// A matcher pattern failed to compile.
    #[error("invalid signature pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A matcher returned a result inconsistent with its own grammar.
    #[error("signature parsing failed: {0}")]
    Internal(String),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`SignatureError`].
pub type Result<T> = std::result::Result<T, SignatureError>;
