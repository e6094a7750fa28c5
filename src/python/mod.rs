//! Python bindings for the tic-tac-toe decision engine.
//!
//! Boards cross the boundary as nine integers (0 empty, 1 X, 2 O) and
//! players as 1 (X) or 2 (O). Moves come back as cell indices, -1 meaning
//! "no move".
//!
//! # Quick Start
//!
//! ```python
//! import tictac_core as ttt
//!
//! board = [1, 1, 0, 0, 0, 0, 0, 0, 0]
//! move, nodes, line = ttt.decide_by_search(board, 1)   # 2, ..., [2]
//! move, probs = ttt.decide_by_policy(board, 2)         # probs: numpy array
//! ttt.compute_outcome(board)                           # "ongoing"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engines;

pub use py_core::*;
pub use py_engines::*;

/// tictac_core: minimax search and heuristic policy for tic-tac-toe.
#[pymodule]
fn tictac_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Rules
    m.add_function(wrap_pyfunction!(compute_outcome, m)?)?;
    m.add_function(wrap_pyfunction!(legal_moves, m)?)?;
    m.add_function(wrap_pyfunction!(to_move, m)?)?;

    // Engines
    m.add_function(wrap_pyfunction!(decide_by_search, m)?)?;
    m.add_function(wrap_pyfunction!(decide_by_policy, m)?)?;

    Ok(())
}
