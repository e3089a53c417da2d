//! Atomic publication of `RuleSet` snapshots.
//!
//! Readers take an `Arc<RuleSet>` snapshot and scan against it for as long as
//! they like. Reloading builds a complete new `RuleSet` first and only then
//! swaps the pointer, so no reader ever observes a half-loaded taxonomy and a
//! failed reload leaves the current snapshot untouched.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::EngineOptions;
use crate::engine::Engine;
use crate::errors::Result;
use crate::rules::RuleSet;

#[derive(Debug)]
pub struct RuleStore {
    current: RwLock<Arc<RuleSet>>,
}

impl RuleStore {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
        }
    }

    /// A store initialised with the bundled rule source.
    pub fn with_default_rules() -> Result<Self> {
        Ok(Self::new(RuleSet::load_default()?))
    }

    /// The currently published rule set.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        // Only an `Arc` is ever written under the lock, so a poisoned lock
        // still holds a complete value.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publishes `rules`, returning the snapshot it replaced.
    pub fn replace(&self, rules: RuleSet) -> Arc<RuleSet> {
        let next = Arc::new(rules);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        debug!("Publishing new rule set snapshot.");
        std::mem::replace(&mut *guard, next)
    }

    /// Loads `path` and publishes it. On error the current snapshot stays.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let rules = RuleSet::load_from_file(path)?;
        self.replace(rules);
        info!("Reloaded rules from {}.", path.display());
        Ok(())
    }

    /// An engine bound to the current snapshot.
    pub fn engine(&self, options: EngineOptions) -> Engine {
        Engine::with_options(self.snapshot(), options)
    }
}
