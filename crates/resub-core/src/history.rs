//! Bounded, deduplicated list of recently used expressions

use std::num::NonZeroUsize;

use crate::{Error, PatternReplacementPair, Result};

/// Most-recent-first history of pattern/replacement pairs.
///
/// Owns no I/O. Callers persist [`HistoryStore::snapshot`] after a mutation.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<PatternReplacementPair>,
    max_recent: NonZeroUsize,
}

impl HistoryStore {
    pub fn new(max_recent: NonZeroUsize) -> Self {
        Self {
            entries: Vec::new(),
            max_recent,
        }
    }

    /// Add `pair` at the front unless an identical pair already exists.
    ///
    /// Existing entries are not moved: adding a pair twice leaves the order as
    /// it was. Returns `true` when the list changed.
    pub fn insert(&mut self, pair: PatternReplacementPair) -> bool {
        if self.contains(&pair) {
            tracing::debug!(%pair, "history already holds pair");
            return false;
        }

        self.entries.insert(0, pair);
        if self.entries.len() > self.max_recent.get() {
            // Only drops one entry; a lowered limit is enforced one insert at a time.
            if let Some(evicted) = self.entries.pop() {
                tracing::debug!(%evicted, "evicted oldest history entry");
            }
        }
        true
    }

    /// Remove the entry at `index`, shifting later entries left.
    pub fn remove_at(&mut self, index: usize) -> Result<PatternReplacementPair> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        tracing::debug!(index, %removed, "removed history entry");
        Ok(removed)
    }

    pub fn snapshot(&self) -> Vec<PatternReplacementPair> {
        self.entries.clone()
    }

    /// Replace the whole state with a persisted snapshot, trusted as-is.
    pub fn restore(&mut self, entries: Vec<PatternReplacementPair>, max_recent: NonZeroUsize) {
        self.entries = entries;
        self.max_recent = max_recent;
    }

    /// Change the limit without truncating; the next insert applies it.
    pub fn set_max_recent(&mut self, max_recent: NonZeroUsize) {
        self.max_recent = max_recent;
    }

    pub fn max_recent(&self) -> NonZeroUsize {
        self.max_recent
    }

    pub fn contains(&self, pair: &PatternReplacementPair) -> bool {
        self.entries.iter().any(|entry| entry == pair)
    }

    pub fn get(&self, index: usize) -> Option<&PatternReplacementPair> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternReplacementPair> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
