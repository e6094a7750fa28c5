//! Heuristic policy engine.
//!
//! A single pass over the board, no look-ahead:
//!
//! - **Prior**: center > corners > edges
//! - **Legality**: occupied cells get a large finite penalty
//! - **Tactics**: bonuses for completing or blocking a line
//! - **Softmax**: max-subtracted, so the distribution is always finite
//!
//! ```rust
//! use tictac_core::core::{Board, Move, Player};
//! use tictac_core::policy::decide_by_policy;
//!
//! let decision = decide_by_policy(&Board::new(), Player::X);
//! assert_eq!(decision.best_move, Some(Move::new(4)));
//!
//! let total: f64 = decision.probabilities.iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod features;
pub mod heuristic;
pub mod softmax;

pub use config::PolicyConfig;
pub use features::logits;
pub use heuristic::{decide_by_policy, decide_by_policy_with, PolicyDecision};
pub use softmax::softmax;
