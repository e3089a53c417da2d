//! Leetspeak normalization.
//!
//! [`LEET_TABLE`] maps each canonical letter to the glyph sequences that
//! stand in for it. Normalization walks the table in declaration order and,
//! for each glyph sequence, replaces every left-to-right, non-overlapping
//! occurrence in the *current* text with the letter.
//!
//! The passes interact. A later entry sees the output of earlier ones, so
//! `4` always becomes `a` (never `h`), `1` always becomes `i` (never `l`),
//! and `v` is rewritten to `u` before the `vv` -> `w` entry runs. The result
//! is neither idempotent nor order-independent; the table and its order are
//! part of the observable behavior of strict scans.
//!
//! Besides the normalized string, [`normalize_with_spans`] records for each
//! output codepoint the range of input codepoints it was produced from, which
//! lets the censor redact the original text at the right positions.
//!
//! License: MIT OR Apache-2.0

use std::ops::Range;

/// Canonical letter and the glyph sequences replaced by it, in application
/// order.
pub const LEET_TABLE: &[(char, &[&str])] = &[
    ('a', &["@", "4"]),
    ('b', &["8", "13", "6"]),
    ('c', &["("]),
    ('d', &[")"]),
    ('e', &["3"]),
    ('f', &["ph"]),
    ('g', &["6", "9"]),
    ('h', &["4", "|-|"]),
    ('i', &["1", "!", "|"]),
    ('j', &["_|"]),
    ('k', &["|<", "1<"]),
    ('l', &["1", "|"]),
    ('m', &[r"|\/|", "|v|", r"/\/\"]),
    ('n', &[r"|\/|", r"/\/"]),
    ('o', &["0"]),
    ('p', &["|D"]),
    ('q', &["9"]),
    ('r', &["12", "|2"]),
    ('s', &["5", "$"]),
    ('t', &["7", "+"]),
    ('u', &["v"]),
    ('v', &[r"\/"]),
    ('w', &[r"\/\/", "vv"]),
    ('x', &["><", "}{"]),
    ('y', &["`/"]),
    ('z', &["2"]),
];

/// Normalized text plus the provenance of each of its codepoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// `spans[i]` is the range of original codepoints that produced
    /// normalized codepoint `i`.
    pub spans: Vec<Range<usize>>,
    /// Codepoint length of the original input.
    pub original_len: usize,
}

impl Normalized {
    /// Maps a codepoint range of the normalized text back to the original.
    pub fn original_range(&self, offset: usize, len: usize) -> Range<usize> {
        if len == 0 {
            let at = self
                .spans
                .get(offset)
                .map_or(self.original_len, |span| span.start);
            return at..at;
        }
        let start = self.spans[offset].start;
        let end = self.spans[offset + len - 1].end;
        start..end
    }
}

/// Applies the leet table to `text`.
pub fn normalize(text: &str) -> String {
    normalize_with_spans(text).text
}

/// Applies the leet table to `text`, tracking where every output codepoint
/// came from.
pub fn normalize_with_spans(text: &str) -> Normalized {
    let mut chars: Vec<char> = text.chars().collect();
    let original_len = chars.len();
    let mut spans: Vec<Range<usize>> = (0..original_len).map(|i| i..i + 1).collect();

    for (letter, glyphs) in LEET_TABLE {
        for glyph in glyphs.iter() {
            let needle: Vec<char> = glyph.chars().collect();
            replace_all(&mut chars, &mut spans, &needle, *letter);
        }
    }

    Normalized {
        text: chars.into_iter().collect(),
        spans,
        original_len,
    }
}

fn replace_all(chars: &mut Vec<char>, spans: &mut Vec<Range<usize>>, needle: &[char], letter: char) {
    let n = needle.len();
    if n == 0 || !chars.windows(n).any(|w| w == needle) {
        return;
    }

    let mut out_chars = Vec::with_capacity(chars.len());
    let mut out_spans = Vec::with_capacity(spans.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i..].starts_with(needle) {
            out_chars.push(letter);
            out_spans.push(spans[i].start..spans[i + n - 1].end);
            i += n;
        } else {
            out_chars.push(chars[i]);
            out_spans.push(spans[i].clone());
            i += 1;
        }
    }
    *chars = out_chars;
    *spans = out_spans;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_username_inputs() {
        assert_eq!(normalize("Th3P0rn0M45ter"), "ThePornoMaster");
        assert_eq!(normalize(r"\/@91n@"), "vagina");
    }

    #[test]
    fn test_earlier_entries_shadow_later_ones() {
        // '4' is consumed by 'a' before 'h' is reached.
        assert_eq!(normalize("4"), "a");
        // '1' is consumed by 'i' before 'l' or 'k' ("1<") are reached.
        assert_eq!(normalize("1<"), "i<");
        // 'v' becomes 'u' before "vv" -> 'w' runs.
        assert_eq!(normalize("vv"), "uu");
        // '6' is consumed by 'b' before 'g'.
        assert_eq!(normalize("6"), "b");
    }

    #[test]
    fn test_multi_character_glyphs() {
        assert_eq!(normalize("|-|"), "h");
        assert_eq!(normalize("phun"), "fun");
        assert_eq!(normalize("13"), "b");
    }

    #[test]
    fn test_single_glyphs_shadow_multi_character_entries() {
        // '|' is rewritten to 'i' long before the 'm' entry is reached.
        assert_eq!(normalize(r"|\/|"), "ivi");
        // The 'n' entry "/\/" consumes the middle of "\/\/" before 'w' runs.
        assert_eq!(normalize(r"\/\/"), r"\n");
    }

    #[test]
    fn test_passes_feed_later_passes() {
        // '|' -> 'i' leaves a '2' that the final 'z' entry rewrites.
        assert_eq!(normalize("|2"), "iz");
        assert_eq!(normalize("12"), "iz");
        // Normalizing pieces separately differs from normalizing the whole.
        assert_eq!(normalize("1") + &normalize("3"), "ie");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(normalize("hello world"), "hello world");
    }

    #[test]
    fn test_replacement_is_case_sensitive() {
        assert_eq!(normalize("PH"), "PH");
        assert_eq!(normalize("|d"), "id");
    }

    #[test]
    fn test_spans_track_original_positions() {
        let n = normalize_with_spans(r"x\/@y");
        assert_eq!(n.text, "xvay");
        assert_eq!(n.spans, vec![0..1, 1..3, 3..4, 4..5]);
        assert_eq!(n.original_range(1, 2), 1..4);
        assert_eq!(n.original_range(4, 0), 5..5);
    }

    #[test]
    fn test_identity_spans_without_substitutions() {
        let n = normalize_with_spans("abc");
        assert_eq!(n.spans, vec![0..1, 1..2, 2..3]);
        assert_eq!(n.original_len, 3);
    }
}
