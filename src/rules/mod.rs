//! Game rules shared by both decision engines.
//!
//! - Winning lines as a constant table
//! - Outcome detection (win, draw, ongoing)
//! - Legal-move enumeration in ascending index order

pub mod lines;
pub mod outcome;

pub use lines::{Line, LINES};
pub use outcome::{compute_outcome, legal_moves, winning_line, MoveList, Outcome};
