use super::*;
use checkers_core::{Side, sq};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::new();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&board, limits);

    assert!(result.best_move.is_some());
    assert!(legal_moves(&board).contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_respects_forced_capture() {
    let mut engine = RandomEngine::seeded(7);
    let board = Board::from_diagram(
        "
        ________
        ________
        ________
        ________
        ___o____
        __x___x_
        ________
        ________
        ",
        Side::X,
    )
    .unwrap();

    for _ in 0..10 {
        let mv = engine.search(&board, SearchLimits::default()).best_move.unwrap();
        assert_eq!((mv.from, mv.to), (sq(5, 2), sq(3, 4)));
    }
}

#[test]
fn random_engine_is_reproducible_when_seeded() {
    let board = Board::new();
    let a: Vec<_> = (0..5)
        .map(|_| RandomEngine::seeded(42).search(&board, SearchLimits::default()).best_move)
        .collect();
    assert!(a.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    let board = Board::empty(Side::X);

    let result = engine.search(&board, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
