//! The 3×3 board, its cells, and move indices.
//!
//! Cells are stored row-major:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! A `Board` is a plain `Copy` value. Nothing in the engines mutates a board
//! handed to them; `with_move` returns the successor instead.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

use super::player::Player;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by a player.
    Mark(Player),
}

impl Cell {
    /// Check if the cell has no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(p) => Some(p),
        }
    }

    /// Base-3 digit used by search keys (empty = 0, X = 1, O = 2).
    #[must_use]
    pub const fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Mark(Player::X) => 1,
            Cell::Mark(Player::O) => 2,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(p) => p.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Self {
        Cell::Mark(p)
    }
}

/// A board position in `0..9`.
///
/// Moves coming from outside the crate may be out of range; `Board::with_move`
/// rejects those instead of panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a move for the given cell index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if the index addresses a cell on the board.
    #[must_use]
    pub const fn in_range(self) -> bool {
        (self.0 as usize) < BOARD_SIZE
    }

    /// Iterate over every cell index in ascending order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE as u8).map(Move)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not address a cell.
    #[display("move {index} is outside the board")]
    OutOfRange {
        /// Offending index.
        index: u8,
    },

    /// The cell already carries a mark.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// Offending index.
        index: u8,
    },
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Not exactly nine cells were found.
    #[display("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells read.
        found: usize,
    },

    /// A character that is neither a mark nor an empty marker.
    #[display("invalid cell character {ch:?}")]
    InvalidCell {
        /// Offending character.
        ch: char,
    },
}

/// Fixed-size 3×3 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit cell contents.
    #[must_use]
    pub const fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Parse a board from text.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and `0` are empty cells.
    /// Whitespace and `|` separators are ignored, so both `"XX......."` and
    /// a three-line grid are accepted.
    pub fn parse(text: &str) -> Result<Self, ParseBoardError> {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut found = 0;

        for ch in text.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Mark(Player::X),
                'O' | 'o' => Cell::Mark(Player::O),
                '.' | '-' | '_' | '0' => Cell::Empty,
                '|' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidCell { ch: c }),
            };
            if found < BOARD_SIZE {
                cells[found] = cell;
            }
            found += 1;
        }

        if found != BOARD_SIZE {
            return Err(ParseBoardError::WrongCellCount { found });
        }
        Ok(Self { cells })
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Get a cell, or `None` if the move is off the board.
    #[must_use]
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.index()).copied()
    }

    /// Check if the addressed cell exists and is empty.
    #[must_use]
    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Number of marks per player as `(x, o)`.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::Mark(Player::X) => (x + 1, o),
            Cell::Mark(Player::O) => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// The player whose turn it is: `X` when both have placed the same
    /// number of marks, otherwise `O`.
    #[must_use]
    pub fn to_move(&self) -> Player {
        let (x, o) = self.counts();
        if x == o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Check if every cell carries a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate over empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(move |mv| self.cells[mv.index()].is_empty())
    }

    /// Return the board with `player`'s mark placed at `mv`.
    pub fn with_move(&self, mv: Move, player: Player) -> Result<Self, MoveError> {
        match self.get(mv) {
            None => Err(MoveError::OutOfRange { index: mv.0 }),
            Some(Cell::Mark(_)) => Err(MoveError::Occupied { index: mv.0 }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[mv.index()] = Cell::Mark(player);
                Ok(next)
            }
        }
    }

    /// Successor board for a move already known to be legal.
    pub(crate) fn place(&self, mv: Move, player: Player) -> Self {
        debug_assert!(self.is_empty_at(mv), "placing on occupied cell {mv}");
        let mut next = *self;
        next.cells[mv.index()] = Cell::Mark(player);
        next
    }
}

impl Index<Move> for Board {
    type Output = Cell;

    /// Panics if the move is out of range; use `Board::get` for untrusted input.
    fn index(&self, mv: Move) -> &Cell {
        &self.cells[mv.index()]
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let r = &self.cells[row * 3..row * 3 + 3];
            write!(f, "{}|{}|{}", r[0].symbol(), r[1].symbol(), r[2].symbol())?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
