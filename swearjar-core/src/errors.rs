//! errors.rs - Custom error types for the swearjar-core library.
//!
//! Only loading a rule source can fail. Once a `RuleSet` exists, every scan,
//! report and censor operation is infallible.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `swearjar-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SwearjarError {
    /// The rule source could not be read.
    #[error("Failed to read rule source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule source was readable but structurally invalid.
    #[error("Invalid rule configuration: {0}")]
    Config(String),

    /// A pattern source is not a valid regular expression.
    #[error("Failed to compile pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{pattern}': length ({len}) exceeds maximum allowed ({max})")]
    PatternLengthExceeded {
        pattern: String,
        len: usize,
        max: usize,
    },
}

impl SwearjarError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SwearjarError::Config(msg.into())
    }

    /// True for both pattern compilation failures and over-long patterns.
    pub fn is_pattern_error(&self) -> bool {
        matches!(
            self,
            SwearjarError::Pattern { .. } | SwearjarError::PatternLengthExceeded { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SwearjarError> = std::result::Result<T, E>;
