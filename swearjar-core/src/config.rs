//! Configuration management for `swearjar-core`.
//!
//! This module reads the YAML rule source and validates its shape. A rule
//! source has exactly two top-level sections:
//!
//! ```yaml
//! simple:
//!   fuck: [sexual]
//! regex:
//!   "butt ?plugs?": [sexual]
//! ```
//!
//! Parsing goes through a generic `serde_yml::Value` rather than a derived
//! struct so that each structural defect can be reported precisely, and so
//! that the declaration order of `regex` entries survives into the
//! compiled `RuleSet`. Bare number and boolean keys (`69: [sexual]`) are
//! read as the words they spell.
//!
//! Engine-level knobs live in [`EngineOptions`].
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_yml::Value;
use std::path::Path;

use crate::errors::{Result, SwearjarError};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Top-level key holding the dictionary words.
pub const SIMPLE_SECTION: &str = "simple";
/// Top-level key holding the pattern rules.
pub const REGEX_SECTION: &str = "regex";

/// A single `key: [tag, ...]` entry from either section, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub key: String,
    pub types: Vec<String>,
}

/// The validated, uncompiled contents of a rule source.
///
/// Nothing here is case-folded or compiled yet; see
/// [`crate::rules::compiler::compile_rules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfig {
    pub simple: Vec<RuleEntry>,
    pub regex: Vec<RuleEntry>,
}

/// Options controlling how an `Engine` prepares text before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Map leetspeak glyphs to canonical letters before matching.
    pub leet_detection: bool,
}

impl RuleConfig {
    /// Parses and validates a YAML rule source.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let document: Value = serde_yml::from_str(text)
            .map_err(|e| SwearjarError::config(format!("failed to parse YAML: {e}")))?;

        if !document.is_mapping() {
            return Err(SwearjarError::config(
                "rule source must be a mapping with `simple` and `regex` sections",
            ));
        }

        let simple = parse_section(&document, SIMPLE_SECTION)?;
        let regex = parse_section(&document, REGEX_SECTION)?;

        debug!(
            "Parsed rule source: {} simple entries, {} regex entries.",
            simple.len(),
            regex.len()
        );
        Ok(Self { simple, regex })
    }

    /// Loads and validates a rule source from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| SwearjarError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        info!(
            "Loaded {} simple and {} regex rules from file {}.",
            config.simple.len(),
            config.regex.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the bundled English rule source.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/en.yaml");
        Self::from_yaml_str(default_yaml)
    }
}

fn parse_section(document: &Value, section: &str) -> Result<Vec<RuleEntry>> {
    let value = document
        .get(section)
        .ok_or_else(|| SwearjarError::config(format!("missing `{section}` section")))?;

    let mapping = value.as_mapping().ok_or_else(|| {
        SwearjarError::config(format!("`{section}` must be a mapping of word to tag list"))
    })?;

    if mapping.is_empty() {
        return Err(SwearjarError::config(format!("`{section}` section is empty")));
    }

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, tags) in mapping.iter() {
        let key = scalar_key(key).ok_or_else(|| {
            SwearjarError::config(format!("`{section}` contains an unsupported key: {key:?}"))
        })?;
        if key.is_empty() {
            return Err(SwearjarError::config(format!("`{section}` contains an empty key")));
        }
        let types = parse_tags(section, &key, tags)?;
        entries.push(RuleEntry { key, types });
    }
    Ok(entries)
}

/// Bare numbers and booleans are valid words (`69: [sexual]`), so scalar
/// keys are taken in their textual form.
fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_tags(section: &str, key: &str, tags: &Value) -> Result<Vec<String>> {
    let sequence = tags.as_sequence().ok_or_else(|| {
        SwearjarError::config(format!(
            "`{section}.{key}` must be a sequence of category tags"
        ))
    })?;

    sequence
        .iter()
        .map(|tag| {
            tag.as_str().map(str::to_string).ok_or_else(|| {
                SwearjarError::config(format!(
                    "`{section}.{key}` contains a non-string tag: {tag:?}"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_regex_declaration_order() {
        let config = RuleConfig::from_yaml_str(
            "simple:\n  foo: [insult]\nregex:\n  zeta: [a]\n  alpha: [b]\n  mid: [c]\n",
        )
        .unwrap();
        let keys: Vec<&str> = config.regex.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = RuleConfig::from_yaml_str("simple:\n  foo: [insult]\n").unwrap_err();
        assert!(matches!(err, SwearjarError::Config(ref m) if m.contains("regex")));
    }

    #[test]
    fn test_scalar_tag_value_is_config_error() {
        let err = RuleConfig::from_yaml_str("simple:\n  foo: insult\nregex:\n  bar: [x]\n")
            .unwrap_err();
        assert!(matches!(err, SwearjarError::Config(ref m) if m.contains("simple.foo")));
    }

    #[test]
    fn test_non_string_tag_is_config_error() {
        let err = RuleConfig::from_yaml_str("simple:\n  foo: [1, 2]\nregex:\n  bar: [x]\n")
            .unwrap_err();
        assert!(matches!(err, SwearjarError::Config(_)));
    }

    #[test]
    fn test_numeric_and_boolean_keys_become_words() {
        let config =
            RuleConfig::from_yaml_str("simple:\n  69: [sexual]\n  true: [x]\nregex:\n  420: [y]\n")
                .unwrap();
        let keys: Vec<&str> = config.simple.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["69", "true"]);
        assert_eq!(config.regex[0].key, "420");
    }

    #[test]
    fn test_null_key_is_config_error() {
        let err = RuleConfig::from_yaml_str("simple:\n  ~: [x]\nregex:\n  y: [z]\n")
            .unwrap_err();
        assert!(matches!(err, SwearjarError::Config(ref m) if m.contains("unsupported key")));
    }

    #[test]
    fn test_empty_document_is_config_error() {
        assert!(matches!(
            RuleConfig::from_yaml_str(""),
            Err(SwearjarError::Config(_))
        ));
    }

    #[test]
    fn test_empty_tag_list_is_allowed() {
        let config =
            RuleConfig::from_yaml_str("simple:\n  foo: []\nregex:\n  bar: [x]\n").unwrap();
        assert!(config.simple[0].types.is_empty());
    }

    #[test]
    fn test_default_rules_parse() {
        let config = RuleConfig::load_default_rules().unwrap();
        assert!(!config.simple.is_empty());
        assert!(!config.regex.is_empty());
    }

    #[test]
    fn test_engine_options_default_disables_leet() {
        assert!(!EngineOptions::default().leet_detection);
    }
}
