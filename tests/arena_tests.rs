//! Agent matchups through the public arena API.

use tictac_core::agent::{Agent, HeuristicPolicy, Minimax, Mode, RandomAgent};
use tictac_core::arena::{play_match, play_series};
use tictac_core::core::{Board, Player};
use tictac_core::rules::Outcome;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_minimax_unbeaten_by_random_over_many_seeds() {
    init_tracing();

    for seed in 0..10 {
        let summary = play_series(&mut Minimax::new(), &mut RandomAgent::new(seed), 6).unwrap();
        assert_eq!(summary.second_wins, 0, "seed {seed}");
        assert_eq!(summary.unfinished, 0);
    }
}

#[test]
fn test_policy_beats_random_more_often_than_not() {
    init_tracing();

    let summary = play_series(&mut HeuristicPolicy::new(), &mut RandomAgent::new(11), 40).unwrap();
    assert!(summary.first_wins > summary.second_wins);
}

#[test]
fn test_mode_agents_play_full_games() {
    init_tracing();

    let mut x: Box<dyn Agent> = Mode::Policy.agent();
    let mut o: Box<dyn Agent> = Mode::Search.agent();
    let record = play_match(&Board::new(), x.as_mut(), o.as_mut()).unwrap();

    assert!(record.outcome.is_terminal());
    assert_ne!(record.outcome, Outcome::Win(Player::X));
    assert_eq!(record.first_player, Player::X);
}

#[test]
fn test_match_record_serializes() {
    let record = play_match(&Board::new(), &mut Minimax::new(), &mut Minimax::new()).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: tictac_core::arena::MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
