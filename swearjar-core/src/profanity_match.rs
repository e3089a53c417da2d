//! Provides the match types produced while scanning, plus helpers that keep
//! matched words out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::trace;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Whether matched words may appear verbatim in trace logs.
    static ref WORD_DEBUG_ALLOWED: bool = {
        std::env::var("SWEARJAR_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Which scanning phase produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    /// Dictionary lookup of a single token.
    Simple,
    /// Pattern match against the whole text.
    Pattern,
}

/// A single occurrence of profanity, borrowed from the scanned text and the
/// rule set. Only valid for the duration of one visitor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfanityMatch<'a> {
    /// The matched text as it appears in the scanned (possibly normalized)
    /// input.
    pub word: &'a str,
    /// Start offset in codepoints.
    pub offset: usize,
    /// Length in codepoints.
    pub len: usize,
    pub types: &'a [String],
    pub source: MatchSource,
}

impl ProfanityMatch<'_> {
    pub fn to_owned_match(&self) -> OwnedMatch {
        OwnedMatch {
            word: self.word.to_string(),
            offset: self.offset,
            len: self.len,
            types: self.types.to_vec(),
            source: self.source,
        }
    }
}

/// An owned copy of a [`ProfanityMatch`], suitable for collecting and
/// serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedMatch {
    pub word: String,
    pub offset: usize,
    pub len: usize,
    pub types: Vec<String>,
    pub source: MatchSource,
}

pub fn redact_word(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

fn get_loggable_word(word: &str) -> String {
    if *WORD_DEBUG_ALLOWED {
        word.to_string()
    } else {
        redact_word(word)
    }
}

pub(crate) fn log_match_trace(m: &ProfanityMatch<'_>) {
    if log::log_enabled!(log::Level::Trace) {
        trace!(
            "Match ({:?}) at {}+{}: '{}' {:?}",
            m.source,
            m.offset,
            m.len,
            get_loggable_word(m.word),
            m.types
        );
    }
}
