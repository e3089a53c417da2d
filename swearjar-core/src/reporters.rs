//! Reporting policies built on [`Engine::scan`].
//!
//! Each reporter is nothing more than a visitor: `profane` stops at the first
//! match, `scorecard` never stops, `contains_type` stops at the first match
//! carrying a requested tag.

use std::collections::{BTreeMap, HashSet};
use std::ops::ControlFlow;

use crate::engine::Engine;

/// Per-category occurrence counts. Ordered by tag so output is stable.
pub type Scorecard = BTreeMap<String, usize>;

impl Engine {
    /// True if `text` contains at least one match.
    pub fn profane(&self, text: &str) -> bool {
        let mut profane = false;
        self.scan(text, |_| {
            profane = true;
            ControlFlow::Break(())
        });
        profane
    }

    /// Counts, for every tag, how many matches carried it.
    pub fn scorecard(&self, text: &str) -> Scorecard {
        let mut scorecard = Scorecard::new();
        self.scan(text, |m| {
            for tag in m.types {
                *scorecard.entry(tag.clone()).or_insert(0) += 1;
            }
            ControlFlow::Continue(())
        });
        scorecard
    }

    /// True if any match carries one of `tags`. Requested tags are compared
    /// case-insensitively against the (lowercase) rule tags.
    pub fn contains_type<I, S>(&self, text: &str, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: HashSet<String> = tags
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect();
        if wanted.is_empty() {
            return false;
        }

        let mut contains = false;
        self.scan(text, |m| {
            if m.types.iter().any(|t| wanted.contains(t)) {
                contains = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        contains
    }
}
