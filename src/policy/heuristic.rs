//! Search-free move selection from a softmax over cell logits.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, Move, Player, BOARD_SIZE};

use super::config::PolicyConfig;
use super::features::logits;
use super::softmax::softmax;

/// Result of a policy decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    /// Most probable empty cell, or `None` on a full board.
    pub best_move: Option<Move>,

    /// Softmax over all nine cells. Occupied cells are not hard-zeroed,
    /// their mass is merely negligible; only empty cells matter for play.
    pub probabilities: [f64; BOARD_SIZE],

    /// Scores the distribution was computed from.
    pub logits: [f64; BOARD_SIZE],
}

impl PolicyDecision {
    /// Chosen cell index, or -1 when there is no move.
    #[must_use]
    pub fn move_index(&self) -> i32 {
        self.best_move.map_or(-1, |mv| mv.index() as i32)
    }

    /// Probability assigned to a cell (0 for out-of-range moves).
    #[must_use]
    pub fn probability(&self, mv: Move) -> f64 {
        self.probabilities.get(mv.index()).copied().unwrap_or(0.0)
    }
}

/// Pick a move with the default weights.
pub fn decide_by_policy(board: &Board, player: Player) -> PolicyDecision {
    decide_by_policy_with(board, player, &PolicyConfig::default())
}

/// Pick a move with custom weights.
///
/// Among empty cells the highest probability wins; ties go to the lowest
/// index.
#[instrument(level = "trace", skip_all, fields(player = %player))]
pub fn decide_by_policy_with(board: &Board, player: Player, config: &PolicyConfig) -> PolicyDecision {
    let logits = logits(board, player, config);

    let mut probabilities = [0.0; BOARD_SIZE];
    probabilities.copy_from_slice(&softmax(&logits));

    let mut best: Option<(Move, f64)> = None;
    for mv in board.empty_cells() {
        let p = probabilities[mv.index()];
        if best.map_or(true, |(_, top)| p > top) {
            best = Some((mv, p));
        }
    }

    let decision = PolicyDecision {
        best_move: best.map(|(mv, _)| mv),
        probabilities,
        logits,
    };

    debug!(
        best_move = decision.move_index(),
        probability = best.map_or(0.0, |(_, p)| p),
        "policy decision"
    );

    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::parse(s).unwrap()
    }

    fn assert_distribution(probs: &[f64; BOARD_SIZE]) {
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        assert!(probs.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_empty_board_takes_center() {
        let decision = decide_by_policy(&Board::new(), Player::X);

        assert_eq!(decision.best_move, Some(Move::new(4)));
        assert_distribution(&decision.probabilities);
        // Corners tie; edges tie.
        assert_eq!(decision.probabilities[0], decision.probabilities[8]);
        assert_eq!(decision.probabilities[1], decision.probabilities[7]);
    }

    #[test]
    fn test_corner_tie_goes_to_lowest_index() {
        let decision = decide_by_policy(&board("... .X. ..."), Player::O);
        assert_eq!(decision.best_move, Some(Move::new(0)));
    }

    #[test]
    fn test_completes_win() {
        let decision = decide_by_policy(&board("XX. O.. ..O"), Player::X);
        assert_eq!(decision.best_move, Some(Move::new(2)));
    }

    #[test]
    fn test_blocks_opponent() {
        let decision = decide_by_policy(&board("OO. X.. ..X"), Player::X);
        assert_eq!(decision.best_move, Some(Move::new(2)));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X can win at 2 or block O at 5.
        let decision = decide_by_policy(&board("XX. OO. ..."), Player::X);
        assert_eq!(decision.best_move, Some(Move::new(2)));
    }

    #[test]
    fn test_occupied_cells_get_negligible_mass() {
        let decision = decide_by_policy(&board("X.. .O. ..."), Player::X);

        assert!(decision.probabilities[0] < 1e-12);
        assert!(decision.probabilities[4] < 1e-12);
        assert_ne!(decision.best_move, Some(Move::new(0)));
        assert_ne!(decision.best_move, Some(Move::new(4)));
        assert_distribution(&decision.probabilities);
    }

    #[test]
    fn test_full_board_is_uniform_and_has_no_move() {
        let decision = decide_by_policy(&board("XOX XOO OXX"), Player::X);

        assert_eq!(decision.best_move, None);
        assert_eq!(decision.move_index(), -1);
        assert_distribution(&decision.probabilities);
        for p in decision.probabilities {
            assert!((p - 1.0 / 9.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_custom_config() {
        // Prefer edges instead of the center.
        let config = PolicyConfig::default().with_prior(PolicyConfig::ring_prior(0.0, 0.1, 0.5));
        let decision = decide_by_policy_with(&Board::new(), Player::X, &config);
        assert_eq!(decision.best_move, Some(Move::new(1)));
    }

    #[test]
    fn test_probability_accessor() {
        let decision = decide_by_policy(&Board::new(), Player::X);
        assert_eq!(decision.probability(Move::new(4)), decision.probabilities[4]);
        assert_eq!(decision.probability(Move::new(12)), 0.0);
    }

    #[test]
    fn test_idempotent() {
        let b = board("X.O .X. ...");
        let first = decide_by_policy(&b, Player::O);
        let second = decide_by_policy(&b, Player::O);

        assert_eq!(first.best_move, second.best_move);
        for (a, b) in first.probabilities.iter().zip(&second.probabilities) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
