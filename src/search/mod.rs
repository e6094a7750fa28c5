//! Adversarial search engine.
//!
//! ## Overview
//!
//! Full-depth minimax over the game tree. The 3×3 tree is small enough to
//! solve exactly, so there is no depth limit, no evaluation function and no
//! pruning beyond terminal detection. Transpositions are collapsed by a memo
//! table keyed on `(board, player to move)`.
//!
//! ## Usage
//!
//! ```rust
//! use tictac_core::core::{Board, Move, Player};
//! use tictac_core::search::decide_by_search;
//!
//! let board: Board = "XX.......".parse().unwrap();
//! let decision = decide_by_search(&board, Player::X);
//!
//! assert_eq!(decision.best_move, Some(Move::new(2)));
//! println!("expanded {} nodes", decision.nodes_expanded());
//! ```

pub mod key;
pub mod memo;
pub mod minimax;
pub mod stats;

pub use key::SearchKey;
pub use memo::MemoTable;
pub use minimax::{decide_by_search, terminal_score, Evaluation, PrincipalVariation, SearchDecision};
pub use stats::SearchStats;
