// swearjar-core/src/lib.rs
//! # Swearjar Core Library
//!
//! `swearjar-core` detects, classifies and censors profanity in user-supplied
//! text against a configurable taxonomy of offense categories. It consumes a
//! YAML rule source, compiles it once into an immutable [`RuleSet`], and
//! exposes scanning, reporting and censoring operations through [`Engine`].
//!
//! ## Modules
//!
//! * `config`: Parses and validates rule sources; defines [`EngineOptions`].
//! * `rules`: The compiled [`RuleSet`], its compiler, and [`RuleStore`] for
//!   atomic reloads.
//! * `text`: Unicode tokenization, case folding and leetspeak normalization.
//! * `engine`: The two-phase scanner and the strict (boundary-free) scanner.
//! * `reporters`: `profane`, `scorecard` and `contains_type`.
//! * `censor`: Offset-exact, length-preserving redaction.
//! * `profanity_match`: Match types and log-safe helpers.
//! * `errors`: [`SwearjarError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use swearjar_core::{Engine, RuleSet, categories};
//!
//! fn main() -> Result<(), swearjar_core::SwearjarError> {
//!     let engine = Engine::new(RuleSet::load_default()?);
//!
//!     assert!(engine.profane("FUCK you"));
//!     assert!(engine.contains_type("you bitch", [categories::INSULT]));
//!     assert_eq!(engine.censor("what the fuck", false), "what the ****");
//!     assert_eq!(engine.censor("what the fuck", true), "what the f***");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only loading rules can fail ([`SwearjarError`]). Scanning, reporting and
//! censoring are infallible; "no profanity" is an ordinary result.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod censor;
pub mod config;
pub mod engine;
pub mod errors;
pub mod profanity_match;
pub mod reporters;
pub mod rules;
pub mod text;

/// Re-exports the configuration types and limits.
pub use config::{EngineOptions, RuleConfig, RuleEntry, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type.
pub use errors::SwearjarError;

pub use engine::Engine;
pub use reporters::Scorecard;
pub use censor::CENSOR_CHAR;

/// Re-exports the match types handed to visitors and returned by `matches`.
pub use profanity_match::{MatchSource, OwnedMatch, ProfanityMatch};

pub use rules::{categories, store::RuleStore, CompiledPattern, RuleSet};

pub use text::leet::{normalize as normalize_leet, LEET_TABLE};
pub use text::tokenizer::{tokenize, Token};
