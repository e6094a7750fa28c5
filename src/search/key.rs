//! Canonical search-state keys.
//!
//! A key packs the nine cells as base-3 digits and appends the
//! player-to-move bit: `key = board_digits * 2 + player_bit`. Every
//! (board, player) pair maps to a distinct value below `3^9 * 2`.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Number of distinct keys.
pub const KEY_SPACE: u32 = 19_683 * 2;

/// Collision-free encoding of (board contents, player to move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SearchKey(pub u32);

impl SearchKey {
    /// Encode a board and the player whose turn it is.
    #[must_use]
    pub fn new(board: &Board, to_move: Player) -> Self {
        let digits = board
            .cells()
            .iter()
            .fold(0u32, |acc, cell| acc * 3 + cell.digit());
        Self(digits * 2 + to_move.bit())
    }

    /// Raw key value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}
