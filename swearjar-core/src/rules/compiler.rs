//! compiler.rs - Compiles a validated `RuleConfig` into a `RuleSet`.
//!
//! This is the only place patterns are compiled. Dictionary keys are folded
//! with `text::fold`, the same folding the scanners apply. Keys that fold to
//! the same word have their tag lists merged in first-seen order.
//!
//! License: MIT OR APACHE 2.0

use daachorse::DoubleArrayAhoCorasick;
use log::debug;
use regex::RegexBuilder;
use std::collections::HashMap;

use crate::config::{RuleConfig, RuleEntry, MAX_PATTERN_LENGTH};
use crate::errors::{Result, SwearjarError};
use crate::rules::{CompiledPattern, RuleSet};
use crate::text::fold::fold;

/// Upper bound on the compiled size of a single pattern.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles every rule in `config`, failing on the first invalid pattern.
pub fn compile_rules(config: RuleConfig) -> Result<RuleSet> {
    debug!(
        "Starting compilation of {} simple and {} regex rules.",
        config.simple.len(),
        config.regex.len()
    );

    if config.simple.is_empty() || config.regex.is_empty() {
        return Err(SwearjarError::config(
            "both `simple` and `regex` sections must be non-empty",
        ));
    }

    let simple = fold_simple(config.simple);
    let keyword_automaton = DoubleArrayAhoCorasick::new(simple.keys())
        .map_err(|e| SwearjarError::config(format!("failed to build keyword automaton: {e}")))?;

    let patterns = config
        .regex
        .into_iter()
        .map(compile_pattern)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Finished compiling rules. {} dictionary words, {} patterns.",
        simple.len(),
        patterns.len()
    );

    Ok(RuleSet {
        simple,
        patterns,
        keyword_automaton,
    })
}

fn fold_simple(entries: Vec<RuleEntry>) -> HashMap<String, Vec<String>> {
    let mut simple: HashMap<String, Vec<String>> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let tags = simple.entry(fold(&entry.key)).or_default();
        for tag in entry.types {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    simple
}

fn compile_pattern(entry: RuleEntry) -> Result<CompiledPattern> {
    if entry.key.len() > MAX_PATTERN_LENGTH {
        return Err(SwearjarError::PatternLengthExceeded {
            len: entry.key.len(),
            pattern: entry.key,
            max: MAX_PATTERN_LENGTH,
        });
    }

    let regex = RegexBuilder::new(&entry.key)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| SwearjarError::Pattern {
            pattern: entry.key.clone(),
            source,
        })?;

    log::trace!(target: "swearjar_core::compiler", "Pattern '{}' compiled successfully.", entry.key);

    Ok(CompiledPattern {
        source: entry.key,
        regex,
        types: entry.types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, types: &[&str]) -> RuleEntry {
        RuleEntry {
            key: key.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_keys_folding_together_merge_tags() {
        let config = RuleConfig {
            simple: vec![
                entry("Darn", &["inappropriate"]),
                entry("DARN", &["insult", "inappropriate"]),
            ],
            regex: vec![entry("x+", &["a"])],
        };
        let rules = compile_rules(config).unwrap();
        assert_eq!(rules.simple_len(), 1);
        assert_eq!(
            rules.lookup("darn").unwrap(),
            &["inappropriate".to_string(), "insult".to_string()]
        );
    }

    #[test]
    fn test_invalid_pattern_is_pattern_error() {
        let config = RuleConfig {
            simple: vec![entry("a", &[])],
            regex: vec![entry("ok", &[]), entry("(unclosed", &["x"])],
        };
        let err = compile_rules(config).unwrap_err();
        assert!(err.is_pattern_error());
        assert!(matches!(err, SwearjarError::Pattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_overlong_pattern_is_rejected() {
        let config = RuleConfig {
            simple: vec![entry("a", &[])],
            regex: vec![entry(&"a".repeat(MAX_PATTERN_LENGTH + 1), &[])],
        };
        assert!(matches!(
            compile_rules(config),
            Err(SwearjarError::PatternLengthExceeded { len, .. }) if len == MAX_PATTERN_LENGTH + 1
        ));
    }

    #[test]
    fn test_empty_sections_are_rejected() {
        let config = RuleConfig {
            simple: vec![],
            regex: vec![entry("x", &[])],
        };
        assert!(matches!(compile_rules(config), Err(SwearjarError::Config(_))));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let config = RuleConfig {
            simple: vec![entry("a", &[])],
            regex: vec![entry("butt ?plugs?", &["sexual"])],
        };
        let rules = compile_rules(config).unwrap();
        assert!(rules.patterns()[0].regex().is_match("BUTTPLUG"));
    }
}
