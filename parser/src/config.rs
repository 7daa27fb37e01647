//! Parser configuration.
//!
//! Selects the matcher backend and the list default separator. Loadable from
//! YAML; missing keys fall back to defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! matcher: regex
//! list_separator: ","
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which [`SignatureMatcher`](crate::SignatureMatcher) backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    /// Hand-written marker scanner ([`ScanMatcher`](crate::ScanMatcher)).
    #[default]
    Scan,
    /// Regular-expression backend ([`RegexMatcher`](crate::RegexMatcher)).
    Regex,
}

/// Settings for a [`SignatureParser`](crate::SignatureParser).
///
/// # Examples
///
/// ```
/// use command_signature_parser::{MatcherKind, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.matcher, MatcherKind::Scan);
/// assert_eq!(config.list_separator, ',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Matcher backend.
    pub matcher: MatcherKind,
    /// Separator used to split list defaults (`{items[]=a,b}`).
    pub list_separator: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherKind::Scan,
            list_separator: ',',
        }
    }
}

impl ParserConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SignatureError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::SignatureError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SignatureError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::SignatureError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ParserConfig = serde_yaml::from_str("matcher: regex\n").unwrap();

        assert_eq!(config.matcher, MatcherKind::Regex);
        assert_eq!(config.list_separator, ',');
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signature.yml");
        let config = ParserConfig {
            matcher: MatcherKind::Regex,
            list_separator: ';',
        };

        config.save(&path).unwrap();
        let loaded = ParserConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ParserConfig::load(dir.path().join("missing.yml"));

        assert!(matches!(result, Err(crate::SignatureError::IoError(_))));
    }

    #[test]
    fn test_load_rejects_unknown_matcher() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "matcher: peg\n").unwrap();

        assert!(matches!(
            ParserConfig::load(&path),
            Err(crate::SignatureError::YamlError(_))
        ));
    }
}
