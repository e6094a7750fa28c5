//! Search statistics for diagnostics.
//!
//! None of these numbers affect which move is chosen.

use serde::{Deserialize, Serialize};

/// Counters collected during one minimax decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Non-terminal nodes expanded (memo hits and terminal leaves excluded).
    pub nodes_expanded: u32,

    /// States answered from the memo table.
    pub memo_hits: u32,

    /// Terminal positions reached.
    pub terminal_leaves: u32,

    /// Distinct states stored in the memo table when the search finished.
    pub memo_entries: u32,

    /// Deepest ply below the root that was visited.
    pub max_depth: u8,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total positions visited, however they were resolved.
    #[must_use]
    pub fn positions_visited(&self) -> u32 {
        self.nodes_expanded + self.memo_hits + self.terminal_leaves
    }

    /// Share of visits answered by the memo table.
    #[must_use]
    pub fn memo_hit_rate(&self) -> f64 {
        let visited = self.positions_visited();
        if visited == 0 {
            0.0
        } else {
            self.memo_hits as f64 / visited as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.positions_visited(), 0);
        assert_eq!(stats.memo_hit_rate(), 0.0);
    }

    #[test]
    fn test_memo_hit_rate() {
        let stats = SearchStats {
            nodes_expanded: 2,
            memo_hits: 1,
            terminal_leaves: 1,
            ..SearchStats::default()
        };
        assert_eq!(stats.positions_visited(), 4);
        assert!((stats.memo_hit_rate() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = SearchStats {
            nodes_expanded: 42,
            ..SearchStats::default()
        };

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
