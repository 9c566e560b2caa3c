use std::collections::BTreeSet;

use serde::Serialize;

/// Keys the engine wrote during the current session, for UI emphasis.
///
/// Only ever holds keys written by the latest merged session, minus any the
/// user has since edited by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighlightSet(BTreeSet<String>);

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Replace the whole set with the keys a session just wrote.
    pub(crate) fn replace(&mut self, written: &BTreeSet<String>) {
        self.0 = written.clone();
    }

    /// A manual edit un-highlights only that field.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}
