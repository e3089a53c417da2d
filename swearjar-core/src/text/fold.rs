//! Case folding shared by rule compilation and scanning.
//!
//! Dictionary keys and scanned text must fold identically or lookups miss.
//! Folding is per codepoint (`char::to_lowercase`), with final sigma `ς`
//! mapped to `σ` so that a Greek word matches regardless of where the sigma
//! falls or how the source wrote it.

const FINAL_SIGMA: char = 'ς';
const SIGMA: char = 'σ';

/// Appends the folded form of `text` to `out`.
pub fn fold_into(text: &str, out: &mut String) {
    out.extend(
        text.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == FINAL_SIGMA { SIGMA } else { c }),
    );
}

/// Returns the folded form of `text`.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    fold_into(text, &mut out);
    out
}
