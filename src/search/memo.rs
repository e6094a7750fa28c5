//! Per-call memo table for the minimax search.
//!
//! Stored scores are relative to the maximizing player of the call that
//! filled the table, so a table must never outlive that call.

use rustc_hash::FxHashMap;

use super::key::SearchKey;
use super::minimax::Evaluation;

/// Map from search key to the solved evaluation of that state.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<SearchKey, Evaluation>,
}

impl MemoTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a solved state.
    #[inline]
    #[must_use]
    pub fn get(&self, key: SearchKey) -> Option<&Evaluation> {
        self.entries.get(&key)
    }

    /// Record a solved state.
    #[inline]
    pub fn insert(&mut self, key: SearchKey, eval: Evaluation) {
        self.entries.insert(key, eval);
    }

    /// Number of solved states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been solved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
