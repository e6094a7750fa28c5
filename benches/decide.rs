use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tictac_core::core::{Board, Player};
use tictac_core::policy::decide_by_policy;
use tictac_core::search::decide_by_search;

fn bench_search(c: &mut Criterion) {
    let empty = Board::new();
    let midgame = Board::parse("X.O .X. ...").expect("valid board");

    c.bench_function("search/empty", |b| {
        b.iter(|| decide_by_search(black_box(&empty), Player::X))
    });
    c.bench_function("search/midgame", |b| {
        b.iter(|| decide_by_search(black_box(&midgame), Player::O))
    });
}

fn bench_policy(c: &mut Criterion) {
    let midgame = Board::parse("XX. O.. ..O").expect("valid board");

    c.bench_function("policy/midgame", |b| {
        b.iter(|| decide_by_policy(black_box(&midgame), Player::X))
    });
}

criterion_group!(benches, bench_search, bench_policy);
criterion_main!(benches);
