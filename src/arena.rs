//! Play agents against each other.
//!
//! The arena owns the board for the length of a match, asks the agent whose
//! turn it is for a move, validates it and applies it. Turn order follows
//! mark counts, so a match can start from any position.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::agent::Agent;
use crate::core::{Board, Move, MoveError, Player};
use crate::rules::{compute_outcome, Outcome};

/// An agent returned a move the board rejects.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArenaError {
    /// The move was off the board or on an occupied cell.
    #[display("agent {agent} played an illegal move: {source}")]
    IllegalMove {
        /// Name of the offending agent.
        agent: String,
        /// Why the board rejected the move.
        source: MoveError,
    },
}

/// One ply of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Who moved.
    pub player: Player,
    /// Where.
    pub mv: Move,
}

/// Everything that happened in one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Position the match started from.
    pub start: Board,
    /// Moves in order.
    pub plies: Vec<Ply>,
    /// Position when the match stopped.
    pub final_board: Board,
    /// `Ongoing` only if an agent gave up with moves still available.
    pub outcome: Outcome,
    /// Which player the first agent controlled.
    pub first_player: Player,
}

impl MatchRecord {
    /// Check if the first agent won.
    #[must_use]
    pub fn first_won(&self) -> bool {
        self.outcome.is_winner(self.first_player)
    }

    /// Check if the second agent won.
    #[must_use]
    pub fn second_won(&self) -> bool {
        self.outcome.is_winner(self.first_player.other())
    }
}

/// Play from `start` until the game ends.
///
/// `first` controls the side to move in `start`; `second` the other side.
pub fn play_match(
    start: &Board,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
) -> Result<MatchRecord, ArenaError> {
    let first_player = start.to_move();
    let mut board = *start;
    let mut plies = Vec::new();

    let outcome = loop {
        let outcome = compute_outcome(&board);
        if outcome.is_terminal() {
            break outcome;
        }

        let player = board.to_move();
        let agent: &mut dyn Agent = if player == first_player { &mut *first } else { &mut *second };

        let Some(mv) = agent.choose(&board, player) else {
            break outcome;
        };

        board = board
            .with_move(mv, player)
            .map_err(|source| ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                source,
            })?;
        trace!(agent = agent.name(), %player, mv = mv.index(), "ply");
        plies.push(Ply { player, mv });
    };

    info!(
        first = first.name(),
        second = second.name(),
        plies = plies.len(),
        %outcome,
        "match finished"
    );

    Ok(MatchRecord {
        start: *start,
        plies,
        final_board: board,
        outcome,
        first_player,
    })
}

/// Win/draw tally over a series of matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Matches won by the first agent.
    pub first_wins: u32,
    /// Matches won by the second agent.
    pub second_wins: u32,
    /// Drawn matches.
    pub draws: u32,
    /// Matches stopped early because an agent had no move.
    pub unfinished: u32,
}

impl SeriesSummary {
    /// Total matches played.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws + self.unfinished
    }

    fn record(&mut self, record: &MatchRecord) {
        match record.outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => self.unfinished += 1,
            Outcome::Win(_) if record.first_won() => self.first_wins += 1,
            Outcome::Win(_) => self.second_wins += 1,
        }
    }
}

/// Play `games` matches from the empty board, alternating who opens.
///
/// Even-numbered games are opened by `first`, odd-numbered ones by `second`.
pub fn play_series(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    games: u32,
) -> Result<SeriesSummary, ArenaError> {
    let mut summary = SeriesSummary::default();
    let start = Board::new();

    for game in 0..games {
        if game % 2 == 0 {
            let record = play_match(&start, first, second)?;
            summary.record(&record);
        } else {
            let record = play_match(&start, second, first)?;
            // Swap perspective back to `first`.
            match record.outcome {
                Outcome::Draw => summary.draws += 1,
                Outcome::Ongoing => summary.unfinished += 1,
                Outcome::Win(_) if record.first_won() => summary.second_wins += 1,
                Outcome::Win(_) => summary.first_wins += 1,
            }
        }
    }

    info!(
        first = first.name(),
        second = second.name(),
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        draws = summary.draws,
        "series finished"
    );

    Ok(summary)
}
