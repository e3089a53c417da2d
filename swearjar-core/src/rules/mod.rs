//! The immutable profanity taxonomy and the machinery around it.
//!
//! * `compiler`: turns a validated `RuleConfig` into a `RuleSet`.
//! * `store`: publishes `RuleSet` snapshots for atomic reloads.
//! * `categories`: the well-known category tags.

pub mod categories;
pub mod compiler;
pub mod store;

use daachorse::DoubleArrayAhoCorasick;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::RuleConfig;
use crate::errors::Result;

/// A pattern rule compiled once at load time.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub(crate) source: String,
    pub(crate) regex: Regex,
    pub(crate) types: Vec<String>,
}

impl CompiledPattern {
    /// The pattern as written in the rule source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled, case-insensitive expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }
}

/// Immutable in-memory representation of the profanity taxonomy.
///
/// Dictionary keys are stored case-folded. Patterns keep their declaration
/// order. A `RuleSet` is never mutated after construction; share it behind
/// an `Arc` and replace it wholesale to reload (see [`store::RuleStore`]).
pub struct RuleSet {
    pub(crate) simple: HashMap<String, Vec<String>>,
    pub(crate) patterns: Vec<CompiledPattern>,
    /// Automaton over every dictionary key, for boundary-free searches.
    pub(crate) keyword_automaton: DoubleArrayAhoCorasick<usize>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("simple", &self.simple.len())
            .field("patterns", &self.patterns)
            .field("keyword_automaton", &"<DoubleArrayAhoCorasick>")
            .finish()
    }
}

impl RuleSet {
    /// Compiles a validated rule configuration.
    pub fn from_config(config: RuleConfig) -> Result<Self> {
        compiler::compile_rules(config)
    }

    /// Parses, validates and compiles a YAML rule source.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::from_config(RuleConfig::from_yaml_str(text)?)
    }

    /// Reads, validates and compiles a YAML rule file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(RuleConfig::load_from_file(path)?)
    }

    /// Compiles the bundled English rule source.
    pub fn load_default() -> Result<Self> {
        Self::from_config(RuleConfig::load_default_rules()?)
    }

    /// Tags for an already case-folded word, if it is in the dictionary.
    pub fn lookup(&self, folded_word: &str) -> Option<&[String]> {
        self.simple.get(folded_word).map(Vec::as_slice)
    }

    /// Pattern rules in declaration order.
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Number of distinct (case-folded) dictionary words.
    pub fn simple_len(&self) -> usize {
        self.simple.len()
    }

    /// True if any dictionary word occurs anywhere inside `folded_text`,
    /// ignoring word boundaries.
    pub fn contains_keyword(&self, folded_text: &str) -> bool {
        self.keyword_automaton
            .find_iter(folded_text.as_bytes())
            .next()
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::from_yaml_str(
            "simple:\n  Foo: [insult]\n  bar: [sexual, insult]\nregex:\n  \"b.z\": [blasphemy]\n",
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_uses_folded_keys() {
        let rules = rules();
        assert_eq!(rules.lookup("foo"), Some(&["insult".to_string()][..]));
        assert_eq!(rules.lookup("Foo"), None);
        assert_eq!(rules.simple_len(), 2);
    }

    #[test]
    fn test_contains_keyword_ignores_boundaries() {
        let rules = rules();
        assert!(rules.contains_keyword("xxfooxx"));
        assert!(rules.contains_keyword("rebar"));
        assert!(!rules.contains_keyword("fo o"));
    }

    #[test]
    fn test_patterns_expose_source_and_tags() {
        let rules = rules();
        let pattern = &rules.patterns()[0];
        assert_eq!(pattern.source(), "b.z");
        assert_eq!(pattern.types(), &["blasphemy".to_string()]);
        assert!(pattern.regex().is_match("BUZZ"));
    }
}
