//! Unicode word tokenization.
//!
//! Tokens are maximal runs of Unicode word characters (letters, marks,
//! digits, connector punctuation such as `_`). Offsets and lengths are
//! reported in codepoints, not bytes, so they can index a `Vec<char>` view
//! of the same string.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Unicode-aware `\w+`. The regex crate enables Unicode classes by default.
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// A word-like unit extracted from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'h> {
    pub text: &'h str,
    /// Start offset in codepoints.
    pub offset: usize,
    /// Length in codepoints.
    pub len: usize,
}

/// Converts monotonically increasing byte offsets into codepoint offsets
/// without rescanning the haystack from the start each time.
#[derive(Debug, Clone)]
pub struct CodepointCursor<'h> {
    haystack: &'h str,
    byte: usize,
    chars: usize,
}

impl<'h> CodepointCursor<'h> {
    pub fn new(haystack: &'h str) -> Self {
        Self {
            haystack,
            byte: 0,
            chars: 0,
        }
    }

    /// Returns the codepoint index of `byte`.
    ///
    /// `byte` must lie on a char boundary and must not be smaller than the
    /// previous call's argument.
    pub fn advance_to(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte, "cursor moved backwards");
        self.chars += self.haystack[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Lazy iterator over the tokens of a string. Call [`tokenize`] again to
/// restart.
#[derive(Debug)]
pub struct Tokens<'h> {
    matches: regex::Matches<'static, 'h>,
    cursor: CodepointCursor<'h>,
}

impl<'h> Iterator for Tokens<'h> {
    type Item = Token<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matches.next()?;
        let offset = self.cursor.advance_to(m.start());
        let len = self.cursor.advance_to(m.end()) - offset;
        Some(Token {
            text: m.as_str(),
            offset,
            len,
        })
    }
}

/// Splits `text` into Unicode word tokens.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        matches: WORD_REGEX.find_iter(text),
        cursor: CodepointCursor::new(text),
    }
}
