//! # tictac-core
//!
//! Decision engine for a tic-tac-toe AI opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure decisions**: Both engines are synchronous functions of
//!    `(board, player)`. They never mutate the board and keep no state
//!    between calls.
//!
//! 2. **Deterministic**: Same input, bit-identical output. Ties always go to
//!    the lowest cell index.
//!
//! 3. **Presentation elsewhere**: Rendering, input and turn orchestration
//!    belong to the caller. The core answers "which move, and why".
//!
//! ## Engines
//!
//! - **Search**: exhaustive minimax with a per-call memo table. Returns the
//!   optimal move, the principal variation and node counts.
//!
//! - **Policy**: one pass of hand-tuned features followed by a softmax.
//!   Returns a move and a probability for every cell.
//!
//! ## Modules
//!
//! - `core`: Players, board, moves, RNG
//! - `rules`: Winning lines, outcome detection, legal moves
//! - `search`: Minimax engine
//! - `policy`: Heuristic softmax engine
//! - `agent`: `Agent` trait, engine wrappers, random baseline, `Mode`
//! - `arena`: Matches and series between agents
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod search;
pub mod policy;
pub mod agent;
pub mod arena;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Move, MoveError, ParseBoardError, Player, BOARD_SIZE, GameRng};

pub use crate::rules::{compute_outcome, legal_moves, winning_line, Line, Outcome, LINES};

pub use crate::search::{decide_by_search, PrincipalVariation, SearchDecision, SearchKey, SearchStats};

pub use crate::policy::{decide_by_policy, decide_by_policy_with, PolicyConfig, PolicyDecision};

pub use crate::agent::{Agent, Decision, HeuristicPolicy, Minimax, Mode, RandomAgent};

pub use crate::arena::{play_match, play_series, ArenaError, MatchRecord, Ply, SeriesSummary};
