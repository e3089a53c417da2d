//! Length-preserving censorship.
//!
//! The input is exploded into a buffer of codepoints. Every match reported by
//! the scanner is mapped to a codepoint range of that buffer and each
//! non-whitespace codepoint in the range becomes `*`. Redaction never changes
//! the buffer length, so offsets computed against the original text stay
//! valid while earlier redactions are applied. Overlapping matches are
//! simply applied in scan order; the last write wins.
//!
//! With leet detection enabled the scanner sees normalized text, which may be
//! shorter than the input. The normalizer's span table maps each match back
//! to the original codepoints it came from.

use std::ops::{ControlFlow, Range};

use crate::engine::Engine;
use crate::profanity_match::ProfanityMatch;
use crate::text::leet;

/// Replacement for every redacted codepoint.
pub const CENSOR_CHAR: char = '*';

impl Engine {
    /// Returns `text` with every match starred out.
    ///
    /// When `hint_first_char` is set, the first codepoint of each matched
    /// span is kept ("fuck" becomes "f***").
    pub fn censor(&self, text: &str, hint_first_char: bool) -> String {
        let mut buffer: Vec<char> = text.chars().collect();

        if self.leet_detection() {
            let normalized = leet::normalize_with_spans(text);
            let _ = self.scan_prepared(&normalized.text, &mut |m: &ProfanityMatch<'_>| {
                let span = normalized.original_range(m.offset, m.len);
                redact_span(&mut buffer, span, hint_first_char);
                ControlFlow::Continue(())
            });
        } else {
            let _ = self.scan_prepared(text, &mut |m: &ProfanityMatch<'_>| {
                redact_span(&mut buffer, m.offset..m.offset + m.len, hint_first_char);
                ControlFlow::Continue(())
            });
        }

        buffer.into_iter().collect()
    }
}

fn redact_span(buffer: &mut [char], span: Range<usize>, hint_first_char: bool) {
    let end = span.end.min(buffer.len());
    let start = if hint_first_char {
        span.start.saturating_add(1)
    } else {
        span.start
    };
    if start >= end {
        return;
    }
    for c in &mut buffer[start..end] {
        if !c.is_whitespace() {
            *c = CENSOR_CHAR;
        }
    }
}
