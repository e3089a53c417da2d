// swearjar-core/src/engine.rs
//! The matching engine.
//!
//! An [`Engine`] binds one immutable [`RuleSet`] snapshot to a set of
//! [`EngineOptions`]. Every higher-level operation (the reporters in
//! `reporters.rs` and the censor in `censor.rs`) is a visitor driven by
//! [`Engine::scan`].
//!
//! A scan runs in two phases over the same prepared text:
//!
//! 1. Dictionary phase: each Unicode word token is case-folded and looked up
//!    in the rule set's dictionary.
//! 2. Pattern phase: each pattern, in declaration order, is matched against
//!    the full text, so patterns may span or split tokens.
//!
//! The visitor returns [`ControlFlow`]. `Break` ends the whole scan at once,
//! including any pattern phase that has not started yet.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::borrow::Cow;
use std::ops::ControlFlow;
use std::sync::Arc;

use crate::config::EngineOptions;
use crate::errors::Result;
use crate::profanity_match::{log_match_trace, MatchSource, OwnedMatch, ProfanityMatch};
use crate::rules::RuleSet;
use crate::text::fold::{fold, fold_into};
use crate::text::leet;
use crate::text::tokenizer::{tokenize, CodepointCursor};

#[derive(Debug, Clone)]
pub struct Engine {
    rules: Arc<RuleSet>,
    options: EngineOptions,
}

impl Engine {
    pub fn new(rules: impl Into<Arc<RuleSet>>) -> Self {
        Self::with_options(rules, EngineOptions::default())
    }

    pub fn with_options(rules: impl Into<Arc<RuleSet>>, options: EngineOptions) -> Self {
        Self {
            rules: rules.into(),
            options,
        }
    }

    /// An engine over the bundled English rule source.
    pub fn with_default_rules() -> Result<Self> {
        Ok(Self::new(RuleSet::load_default()?))
    }

    /// Enables or disables leetspeak normalization before matching.
    pub fn set_leet_detection(&mut self, enabled: bool) -> &mut Self {
        debug!("Leet detection set to {}.", enabled);
        self.options.leet_detection = enabled;
        self
    }

    pub fn leet_detection(&self) -> bool {
        self.options.leet_detection
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Points this engine at a new snapshot. Scans already running elsewhere
    /// on a clone keep the snapshot they started with.
    pub fn replace_rules(&mut self, rules: impl Into<Arc<RuleSet>>) {
        self.rules = rules.into();
    }

    /// Scans `text`, invoking `visitor` once per match until it breaks.
    pub fn scan<F>(&self, text: &str, mut visitor: F)
    where
        F: FnMut(&ProfanityMatch<'_>) -> ControlFlow<()>,
    {
        let prepared = self.prepare(text);
        let _ = self.scan_prepared(&prepared, &mut visitor);
    }

    /// Collects every match in scan order.
    pub fn matches(&self, text: &str) -> Vec<OwnedMatch> {
        let mut out = Vec::new();
        self.scan(text, |m| {
            out.push(m.to_owned_match());
            ControlFlow::Continue(())
        });
        out
    }

    /// Boundary-free check intended for short identifiers such as usernames.
    ///
    /// True if any pattern matches anywhere in `text`, or any dictionary word
    /// occurs as a case-insensitive substring. This deliberately trades
    /// precision for recall: "AssassinsCreed" contains "ass" and is reported.
    pub fn scan_strict(&self, text: &str) -> bool {
        let prepared = self.prepare(text);

        if self
            .rules
            .patterns()
            .iter()
            .any(|p| p.regex().is_match(&prepared))
        {
            return true;
        }

        self.rules.contains_keyword(&fold(&prepared))
    }

    /// Applies leet normalization when enabled.
    pub(crate) fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.leet_detection {
            Cow::Owned(leet::normalize(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Runs both phases over already-prepared text.
    pub(crate) fn scan_prepared<F>(&self, text: &str, visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&ProfanityMatch<'_>) -> ControlFlow<()>,
    {
        let mut folded = String::new();
        for token in tokenize(text) {
            folded.clear();
            fold_into(token.text, &mut folded);

            if let Some(types) = self.rules.lookup(&folded) {
                let m = ProfanityMatch {
                    word: token.text,
                    offset: token.offset,
                    len: token.len,
                    types,
                    source: MatchSource::Simple,
                };
                log_match_trace(&m);
                visitor(&m)?;
            }
        }

        for pattern in self.rules.patterns() {
            let mut cursor = CodepointCursor::new(text);
            for found in pattern.regex().find_iter(text) {
                let offset = cursor.advance_to(found.start());
                let len = cursor.advance_to(found.end()) - offset;
                let m = ProfanityMatch {
                    word: found.as_str(),
                    offset,
                    len,
                    types: pattern.types(),
                    source: MatchSource::Pattern,
                };
                log_match_trace(&m);
                visitor(&m)?;
            }
        }

        ControlFlow::Continue(())
    }
}
