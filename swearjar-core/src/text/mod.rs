//! Text preparation primitives used by the scanners.
//!
//! * `fold`: the case folding shared by rules and scanners.
//! * `tokenizer`: Unicode-aware word extraction with codepoint offsets.
//! * `leet`: optional leetspeak normalization with provenance tracking.

pub mod fold;
pub mod leet;
pub mod tokenizer;
