//! The two sides of the game.
//!
//! `X` always opens. Turn order is never stored: it is derived from mark
//! counts on the board (see `Board::to_move`).

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single bit used by search keys (`X` = 0, `O` = 1).
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Mark character used when printing boards.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
