//! Heuristic policy weights.

use serde::{Deserialize, Serialize};

use crate::core::BOARD_SIZE;

/// Tunable constants of the heuristic policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Per-cell base logit, row-major.
    /// Default favors center (1.0) over corners (0.4) over edges (0.2).
    pub prior: [f64; BOARD_SIZE],

    /// Logit assigned to occupied cells.
    /// Large and negative but finite so the softmax stays defined.
    pub occupied_penalty: f64,

    /// Added to the empty cell of a line the mover can complete.
    pub win_bonus: f64,

    /// Added to the empty cell of a line the opponent can complete.
    pub block_bonus: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            prior: Self::ring_prior(1.0, 0.4, 0.2),
            occupied_penalty: -999.0,
            win_bonus: 2.0,
            block_bonus: 1.5,
        }
    }
}

impl PolicyConfig {
    /// Build a symmetric prior from center, corner and edge weights.
    #[must_use]
    pub const fn ring_prior(center: f64, corner: f64, edge: f64) -> [f64; BOARD_SIZE] {
        [
            corner, edge, corner, //
            edge, center, edge, //
            corner, edge, corner,
        ]
    }

    /// Create a new config with a custom prior table.
    pub fn with_prior(mut self, prior: [f64; BOARD_SIZE]) -> Self {
        self.prior = prior;
        self
    }

    /// Create a new config with custom occupied-cell penalty.
    pub fn with_occupied_penalty(mut self, penalty: f64) -> Self {
        self.occupied_penalty = penalty;
        self
    }

    /// Create a new config with custom win bonus.
    pub fn with_win_bonus(mut self, bonus: f64) -> Self {
        self.win_bonus = bonus;
        self
    }

    /// Create a new config with custom block bonus.
    pub fn with_block_bonus(mut self, bonus: f64) -> Self {
        self.block_bonus = bonus;
        self
    }
}
