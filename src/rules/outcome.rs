//! Outcome detection and legal-move enumeration.
//!
//! Both functions read only the board. Outcomes are never cached; callers
//! recompute them whenever the board changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::instrument;

use crate::core::{Board, Cell, Move, Player, BOARD_SIZE};

use super::lines::{Line, LINES};

/// Legal moves in ascending order. Never longer than the board.
pub type MoveList = SmallVec<[Move; BOARD_SIZE]>;

/// State of a game as read from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Player),
    /// Board full, no line completed.
    Draw,
    /// At least one empty cell and no winner.
    Ongoing,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(p),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(p) => write!(f, "{p} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// First completed line in table order, with its owner.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board[a] {
            Cell::Mark(p) if board[b] == board[a] && board[c] == board[a] => Some((line, p)),
            _ => None,
        }
    })
}

/// Determine the outcome of a board.
#[instrument(level = "trace", skip_all)]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some((_, player)) = winning_line(board) {
        return Outcome::Win(player);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// All empty cells, ascending.
///
/// Does not look at the outcome: a won board with empty cells still lists
/// them.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    board.empty_cells().collect()
}
