//! Minimax engine integration tests.

use tictac_core::core::{Board, Move, Player};
use tictac_core::rules::{compute_outcome, Outcome};
use tictac_core::search::decide_by_search;

fn board(s: &str) -> Board {
    Board::parse(s).unwrap()
}

/// Play the principal variation out and return the final board.
fn play_out(start: &Board, player: Player, line: &[Move]) -> Board {
    let mut b = *start;
    let mut to_move = player;
    for &mv in line {
        b = b.with_move(mv, to_move).unwrap();
        to_move = to_move.other();
    }
    b
}

// =============================================================================
// Concrete Positions
// =============================================================================

#[test]
fn test_completes_top_row_and_wins() {
    let start = board("XX. ... ...");
    let decision = decide_by_search(&start, Player::X);

    assert_eq!(decision.best_move, Some(Move::new(2)));
    assert_eq!(decision.move_index(), 2);

    let after = start.with_move(Move::new(2), Player::X).unwrap();
    assert_eq!(compute_outcome(&after), Outcome::Win(Player::X));
}

#[test]
fn test_win_preferred_over_block() {
    // O can win at 5 or block X at 2.
    let decision = decide_by_search(&board("XX. OO. X.."), Player::O);
    assert_eq!(decision.best_move, Some(Move::new(5)));
    assert_eq!(decision.score, 1);
}

#[test]
fn test_full_board_returns_sentinel() {
    let decision = decide_by_search(&board("XOX XOO OXX"), Player::O);

    assert_eq!(decision.move_index(), -1);
    assert!(decision.principal_variation.is_empty());
    assert_eq!(decision.nodes_expanded(), 0);
}

// =============================================================================
// Optimal Play
// =============================================================================

#[test]
fn test_optimal_play_from_empty_board_draws() {
    let mut b = Board::new();
    let mut player = Player::X;

    while !compute_outcome(&b).is_terminal() {
        let decision = decide_by_search(&b, player);
        let mv = decision.best_move.expect("ongoing board must have a move");
        b = b.with_move(mv, player).unwrap();
        player = player.other();
    }

    assert_eq!(compute_outcome(&b), Outcome::Draw);
}

#[test]
fn test_principal_variation_ends_in_promised_result() {
    for (text, player) in [
        ("... ... ...", Player::X),
        ("X.. ... ...", Player::O),
        ("X.O .X. ...", Player::O),
        ("XX. OO. X..", Player::O),
        (".X. ... ...", Player::O),
    ] {
        let start = board(text);
        let decision = decide_by_search(&start, player);
        let end = play_out(&start, player, &decision.principal_variation);

        let outcome = compute_outcome(&end);
        assert!(outcome.is_terminal(), "{text}: line stops early");
        let expected = match decision.score {
            1 => Outcome::Win(player),
            -1 => Outcome::Win(player.other()),
            _ => Outcome::Draw,
        };
        assert_eq!(outcome, expected, "{text}");
    }
}

#[test]
fn test_edge_opening_reply_is_not_losing() {
    // An edge opening is a draw with correct replies.
    let decision = decide_by_search(&board(".X. ... ..."), Player::O);
    assert_eq!(decision.score, 0);
}

// =============================================================================
// Determinism and Memoization
// =============================================================================

#[test]
fn test_repeated_calls_identical() {
    let b = board("X.. .O. ..X");
    let first = decide_by_search(&b, Player::O);
    let second = decide_by_search(&b, Player::O);

    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.nodes_expanded(), second.nodes_expanded());
    assert_eq!(first.principal_variation, second.principal_variation);
    assert_eq!(first, second);
}

#[test]
fn test_memo_not_shared_between_roots() {
    // Same board, opposite maximizing players. Cached scores from one call
    // must not leak into the other.
    let b = board("XX. OO. ...");
    let for_x = decide_by_search(&b, Player::X);
    let for_o = decide_by_search(&b, Player::O);

    assert_eq!(for_x.best_move, Some(Move::new(2)));
    assert_eq!(for_x.score, 1);
    // For O, 2 blocks and forks (5 and 6), tying with the direct win at 5.
    assert_eq!(for_o.best_move, Some(Move::new(2)));
    assert_eq!(for_o.score, 1);
}

#[test]
fn test_ties_below_root_go_to_lowest_index() {
    // After O forks at 2, every X reply loses, so X answers at 5, the lowest
    // empty cell. O then completes the diagonal at 6.
    let decision = decide_by_search(&board("XX. OO. ..."), Player::O);
    assert_eq!(
        decision.principal_variation.as_slice(),
        &[Move::new(2), Move::new(5), Move::new(6)]
    );
}

#[test]
fn test_node_count_bounded_by_distinct_states() {
    let decision = decide_by_search(&Board::new(), Player::X);
    let stats = decision.stats;

    // Far fewer than 9! thanks to transpositions.
    assert!(stats.nodes_expanded > 1000);
    assert!(stats.nodes_expanded < 6000);
    assert!(stats.memo_hits > 0);
}
