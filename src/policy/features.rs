//! Per-cell logits for the heuristic policy.

use crate::core::{Board, Cell, Player, BOARD_SIZE};
use crate::rules::LINES;

use super::config::PolicyConfig;

/// Score every cell for `player`.
///
/// 1. Start from the prior table.
/// 2. Occupied cells are overwritten with the occupied penalty.
/// 3. Each line with exactly one empty cell adds the win bonus to that cell
///    when the mover owns the other two, or the block bonus when the
///    opponent does. Bonuses from several lines add up.
#[must_use]
pub fn logits(board: &Board, player: Player, config: &PolicyConfig) -> [f64; BOARD_SIZE] {
    let mut logits = config.prior;

    for (logit, cell) in logits.iter_mut().zip(board.cells()) {
        if !cell.is_empty() {
            *logit = config.occupied_penalty;
        }
    }

    for line in LINES {
        let mut mine = 0;
        let mut theirs = 0;
        let mut empty = None;
        let mut empty_count = 0;

        for mv in line {
            match board[mv] {
                Cell::Empty => {
                    empty = Some(mv);
                    empty_count += 1;
                }
                Cell::Mark(p) if p == player => mine += 1,
                Cell::Mark(_) => theirs += 1,
            }
        }

        if let (1, Some(target)) = (empty_count, empty) {
            if mine == 2 {
                logits[target.index()] += config.win_bonus;
            }
            if theirs == 2 {
                logits[target.index()] += config.block_bonus;
            }
        }
    }

    logits
}
