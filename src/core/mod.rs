//! Core types: players, board, moves, RNG.
//!
//! Everything here is plain `Copy` data or a small wrapper around it. The
//! rules and both decision engines are built on top of these types.

pub mod board;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Move, MoveError, ParseBoardError, BOARD_SIZE};
pub use player::Player;
pub use rng::GameRng;
