//! Decision engine bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::policy;
use crate::search;

use super::py_core::{board_from_cells, player_from_code};

/// Optimal move by exhaustive search.
///
/// Returns `(move, nodes_expanded, principal_variation)`; `move` is -1 when
/// the board has no move.
#[pyfunction]
pub fn decide_by_search(cells: Vec<u8>, player: u8) -> PyResult<(i32, u32, Vec<usize>)> {
    let board = board_from_cells(&cells)?;
    let player = player_from_code(player)?;

    let decision = search::decide_by_search(&board, player);
    let line = decision
        .principal_variation
        .iter()
        .map(|mv| mv.index())
        .collect();

    Ok((decision.move_index(), decision.nodes_expanded(), line))
}

/// Move and probability distribution from the heuristic policy.
///
/// Returns `(move, probabilities)` with a length-9 float64 array.
#[pyfunction]
pub fn decide_by_policy<'py>(
    py: Python<'py>,
    cells: Vec<u8>,
    player: u8,
) -> PyResult<(i32, Bound<'py, PyArray1<f64>>)> {
    let board = board_from_cells(&cells)?;
    let player = player_from_code(player)?;

    let decision = policy::decide_by_policy(&board, player);
    let probs = PyArray1::from_slice_bound(py, &decision.probabilities);

    Ok((decision.move_index(), probs))
}
