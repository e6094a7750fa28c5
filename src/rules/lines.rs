//! The eight winning lines.

use crate::core::Move;

/// Three cells that win when all carry the same mark.
pub type Line = [Move; 3];

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Move(0), Move(1), Move(2)],
    [Move(3), Move(4), Move(5)],
    [Move(6), Move(7), Move(8)],
    // Columns
    [Move(0), Move(3), Move(6)],
    [Move(1), Move(4), Move(7)],
    [Move(2), Move(5), Move(8)],
    // Diagonals
    [Move(0), Move(4), Move(8)],
    [Move(2), Move(4), Move(6)],
];
