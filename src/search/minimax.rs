//! Exhaustive minimax with per-call memoization.
//!
//! Every score is relative to the maximizing player fixed at the root of a
//! `decide_by_search` call: +1 win, 0 draw, -1 loss. The maximizing player
//! is passed explicitly through the recursion and the memo table is created
//! and dropped inside the call, so two calls never share cached scores.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{Board, Move, Player, BOARD_SIZE};
use crate::rules::{compute_outcome, legal_moves, Outcome};

use super::key::SearchKey;
use super::memo::MemoTable;
use super::stats::SearchStats;

/// Move sequence both sides follow under optimal play.
pub type PrincipalVariation = SmallVec<[Move; BOARD_SIZE]>;

/// Solved value of a search state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// -1, 0 or +1 from the maximizing player's point of view.
    pub score: i8,
    /// Optimal continuation from the state.
    pub principal_variation: PrincipalVariation,
}

impl Evaluation {
    fn leaf(score: i8) -> Self {
        Self {
            score,
            principal_variation: PrincipalVariation::new(),
        }
    }
}

/// Result of a minimax decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDecision {
    /// Optimal move, or `None` if the board has no move to offer.
    pub best_move: Option<Move>,

    /// Minimax value of the root for the requesting player.
    pub score: i8,

    /// Optimal line starting with `best_move`.
    pub principal_variation: PrincipalVariation,

    /// Search diagnostics.
    pub stats: SearchStats,
}

impl SearchDecision {
    fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            principal_variation: PrincipalVariation::new(),
            stats: SearchStats::default(),
        }
    }

    /// Non-terminal nodes expanded while deciding.
    #[must_use]
    pub fn nodes_expanded(&self) -> u32 {
        self.stats.nodes_expanded
    }

    /// Chosen cell index, or -1 when there is no move.
    #[must_use]
    pub fn move_index(&self) -> i32 {
        self.best_move.map_or(-1, |mv| mv.index() as i32)
    }
}

/// Score of a finished game for the maximizing player.
#[must_use]
pub fn terminal_score(outcome: Outcome, maximizer: Player) -> i8 {
    match outcome {
        Outcome::Win(p) if p == maximizer => 1,
        Outcome::Win(_) => -1,
        Outcome::Draw | Outcome::Ongoing => 0,
    }
}

/// Solve the position and return the optimal move for `player`.
///
/// Ties between equally scored moves go to the lowest index. A board with
/// no empty cell, or one already won, yields no move and an empty line.
#[instrument(level = "trace", skip_all, fields(player = %player))]
pub fn decide_by_search(board: &Board, player: Player) -> SearchDecision {
    if legal_moves(board).is_empty() {
        return SearchDecision::no_move();
    }

    let mut searcher = Searcher::default();
    let root = searcher.solve(board, player, player, 0);

    let mut stats = searcher.stats;
    stats.memo_entries = searcher.memo.len() as u32;

    let decision = SearchDecision {
        best_move: root.principal_variation.first().copied(),
        score: root.score,
        principal_variation: root.principal_variation,
        stats,
    };

    debug!(
        best_move = decision.move_index(),
        score = decision.score,
        nodes_expanded = stats.nodes_expanded,
        memo_hits = stats.memo_hits,
        "minimax decision"
    );

    decision
}

/// State of one top-level search. Dropped when the decision returns.
#[derive(Default)]
struct Searcher {
    memo: MemoTable,
    stats: SearchStats,
}

impl Searcher {
    fn solve(&mut self, board: &Board, to_move: Player, maximizer: Player, depth: u8) -> Evaluation {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let outcome = compute_outcome(board);
        if outcome.is_terminal() {
            self.stats.terminal_leaves += 1;
            return Evaluation::leaf(terminal_score(outcome, maximizer));
        }

        let key = SearchKey::new(board, to_move);
        if let Some(cached) = self.memo.get(key) {
            self.stats.memo_hits += 1;
            return cached.clone();
        }

        self.stats.nodes_expanded += 1;
        let maximizing = to_move == maximizer;

        let mut best: Option<(Move, Evaluation)> = None;
        for mv in legal_moves(board) {
            let child = self.solve(&board.place(mv, to_move), to_move.other(), maximizer, depth + 1);

            // Strict comparison keeps the lowest index on ties.
            let improves = match &best {
                None => true,
                Some((_, current)) if maximizing => child.score > current.score,
                Some((_, current)) => child.score < current.score,
            };
            if improves {
                best = Some((mv, child));
            }
        }

        let eval = match best {
            Some((mv, child)) => {
                let mut principal_variation = PrincipalVariation::new();
                principal_variation.push(mv);
                principal_variation.extend(child.principal_variation);
                Evaluation {
                    score: child.score,
                    principal_variation,
                }
            }
            // Ongoing boards always have an empty cell.
            None => Evaluation::leaf(0),
        };

        self.memo.insert(key, eval.clone());
        eval
    }
}
