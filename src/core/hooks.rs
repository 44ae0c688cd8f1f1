//! Level-gated hook callbacks
//!
//! Hooks run on the emitting thread after the log line has been written, and
//! only for emissions at exactly the level they were installed for.

use super::log_level::LogLevel;
use super::timestamp::Timestamp;
use std::collections::HashMap;
use std::sync::Arc;

/// Callback invoked with the event timestamp, level and raw (unformatted) message
pub type Hook = Arc<dyn Fn(&Timestamp, LogLevel, &str) + Send + Sync>;

/// Append-only registry of hooks per level
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: HashMap<LogLevel, Arc<Vec<Hook>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook after the ones already installed for `level`
    pub fn install<F>(&mut self, level: LogLevel, hook: F)
    where
        F: Fn(&Timestamp, LogLevel, &str) + Send + Sync + 'static,
    {
        Arc::make_mut(self.hooks.entry(level).or_default()).push(Arc::new(hook));
    }

    /// Hooks for exactly `level`, in installation order.
    ///
    /// The returned list is a snapshot: later installs do not affect it, so it
    /// can be invoked after the logger lock is released.
    pub fn snapshot(&self, level: LogLevel) -> Option<Arc<Vec<Hook>>> {
        self.hooks.get(&level).filter(|hooks| !hooks.is_empty()).cloned()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.hooks.get(&level).map_or(0, |hooks| hooks.len())
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.values().all(|hooks| hooks.is_empty())
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(LogLevel, usize)> =
            self.hooks.iter().map(|(level, hooks)| (*level, hooks.len())).collect();
        counts.sort();
        f.debug_struct("HookRegistry").field("hooks", &counts).finish()
    }
}
