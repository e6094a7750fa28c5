//! Board and player conversions, and rule functions.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Cell, Player, BOARD_SIZE};
use crate::rules::{self, Outcome};

/// Build a board from nine integer cells.
pub(crate) fn board_from_cells(cells: &[u8]) -> PyResult<Board> {
    if cells.len() != BOARD_SIZE {
        return Err(PyValueError::new_err(format!(
            "expected {} cells, got {}",
            BOARD_SIZE,
            cells.len()
        )));
    }

    let mut out = [Cell::Empty; BOARD_SIZE];
    for (slot, &code) in out.iter_mut().zip(cells) {
        *slot = match code {
            0 => Cell::Empty,
            1 => Cell::Mark(Player::X),
            2 => Cell::Mark(Player::O),
            other => {
                return Err(PyValueError::new_err(format!("invalid cell value {other}")));
            }
        };
    }
    Ok(Board::from_cells(out))
}

/// Decode a player code (1 = X, 2 = O).
pub(crate) fn player_from_code(code: u8) -> PyResult<Player> {
    match code {
        1 => Ok(Player::X),
        2 => Ok(Player::O),
        other => Err(PyValueError::new_err(format!("invalid player {other}"))),
    }
}

pub(crate) fn player_code(player: Player) -> u8 {
    match player {
        Player::X => 1,
        Player::O => 2,
    }
}

/// Outcome of a board: "x", "o", "draw" or "ongoing".
#[pyfunction]
pub fn compute_outcome(cells: Vec<u8>) -> PyResult<&'static str> {
    let board = board_from_cells(&cells)?;
    Ok(match rules::compute_outcome(&board) {
        Outcome::Win(Player::X) => "x",
        Outcome::Win(Player::O) => "o",
        Outcome::Draw => "draw",
        Outcome::Ongoing => "ongoing",
    })
}

/// Empty cell indices, ascending.
#[pyfunction]
pub fn legal_moves(cells: Vec<u8>) -> PyResult<Vec<usize>> {
    let board = board_from_cells(&cells)?;
    Ok(rules::legal_moves(&board).iter().map(|mv| mv.index()).collect())
}

/// Player whose turn it is, by mark counts (1 = X, 2 = O).
#[pyfunction]
pub fn to_move(cells: Vec<u8>) -> PyResult<u8> {
    let board = board_from_cells(&cells)?;
    Ok(player_code(board.to_move()))
}
