//! Agents: move choosers behind a common trait, and the engine mode switch.
//!
//! - `Agent`: choose a move for a given board and player
//! - `Minimax`, `HeuristicPolicy`: wrappers over the two engines
//! - `RandomAgent`: seeded uniform baseline
//! - `Mode`: pick one engine per AI turn and time the decision

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, Move, Player};
use crate::policy::{decide_by_policy, decide_by_policy_with, PolicyConfig, PolicyDecision};
use crate::rules::legal_moves;
use crate::search::{decide_by_search, SearchDecision};

/// Something that picks moves.
pub trait Agent: Send {
    /// Short name for logs and summaries.
    fn name(&self) -> &str;

    /// Choose a move for `player`.
    ///
    /// Returns `None` if there is nothing to play.
    fn choose(&mut self, board: &Board, player: Player) -> Option<Move>;
}

/// Optimal player backed by the minimax engine.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    last: Option<SearchDecision>,
}

impl Minimax {
    /// Create a new minimax agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics of the most recent decision.
    #[must_use]
    pub fn last_decision(&self) -> Option<&SearchDecision> {
        self.last.as_ref()
    }
}

impl Agent for Minimax {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose(&mut self, board: &Board, player: Player) -> Option<Move> {
        let decision = decide_by_search(board, player);
        let mv = decision.best_move;
        self.last = Some(decision);
        mv
    }
}

/// Greedy player backed by the heuristic policy.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy {
    config: PolicyConfig,
}

impl HeuristicPolicy {
    /// Create a policy agent with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy agent with custom weights.
    pub fn with_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Weights in use.
    #[must_use]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl Agent for HeuristicPolicy {
    fn name(&self) -> &str {
        "policy"
    }

    fn choose(&mut self, board: &Board, player: Player) -> Option<Move> {
        decide_by_policy_with(board, player, &self.config).best_move
    }
}

/// Uniformly random legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, board: &Board, _player: Player) -> Option<Move> {
        let moves = legal_moves(board);
        self.rng.choose(moves.as_slice()).copied()
    }
}

/// Which engine answers an AI turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Exhaustive minimax.
    #[default]
    Search,
    /// Heuristic softmax policy.
    Policy,
}

/// Output of whichever engine `Mode` selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// From the search engine.
    Search(SearchDecision),
    /// From the policy engine.
    Policy(PolicyDecision),
}

impl Decision {
    /// The chosen move.
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        match self {
            Decision::Search(d) => d.best_move,
            Decision::Policy(d) => d.best_move,
        }
    }

    /// Chosen cell index, or -1 when there is no move.
    #[must_use]
    pub fn move_index(&self) -> i32 {
        self.best_move().map_or(-1, |mv| mv.index() as i32)
    }

    /// Nodes expanded (zero for the policy engine).
    #[must_use]
    pub fn nodes_expanded(&self) -> u32 {
        match self {
            Decision::Search(d) => d.nodes_expanded(),
            Decision::Policy(_) => 0,
        }
    }
}

impl Mode {
    /// Run the selected engine.
    pub fn decide(self, board: &Board, player: Player) -> Decision {
        match self {
            Mode::Search => Decision::Search(decide_by_search(board, player)),
            Mode::Policy => Decision::Policy(decide_by_policy(board, player)),
        }
    }

    /// Run the selected engine and measure wall-clock decision time.
    pub fn decide_timed(self, board: &Board, player: Player) -> (Decision, Duration) {
        let start = Instant::now();
        let decision = self.decide(board, player);
        (decision, start.elapsed())
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Search => "Rule-based (Minimax)",
            Mode::Policy => "Learned (Tiny Policy)",
        }
    }

    /// Agent answering turns in this mode.
    #[must_use]
    pub fn agent(self) -> Box<dyn Agent> {
        match self {
            Mode::Search => Box::new(Minimax::new()),
            Mode::Policy => Box::new(HeuristicPolicy::new()),
        }
    }
}
