use super::*;
use checkers_core::{Side, best_move, sq};

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::new();
    let board = Board::new();

    let result = engine.search(&board, SearchLimits::depth(3));

    let mv = result.best_move.expect("opening has moves");
    assert!(legal_moves(&board).contains(&mv));
    assert_eq!(result.best_move, best_move(&board, 3));
    assert!(result.nodes > 0);
}

#[test]
fn parallel_root_matches_sequential() {
    let board = Board::new().make_move(Move::new(sq(5, 2), sq(4, 3))).unwrap();
    let limits = SearchLimits::depth(4);

    let seq = MinimaxEngine::new().search(&board, limits);
    let par = MinimaxEngine::new().parallel(true).search(&board, limits);

    assert_eq!(seq.best_move, par.best_move);
    assert_eq!(seq.score, par.score);
    assert_eq!(seq.nodes, par.nodes);
}

#[test]
fn minimax_engine_handles_lost_position() {
    let mut engine = MinimaxEngine::new();
    let board = Board::empty(Side::O);

    let result = engine.search(&board, SearchLimits::depth(2));

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
}

#[test]
fn custom_weights_change_the_score() {
    let board = Board::from_diagram(
        "
        ________
        o_______
        ________
        ____X___
        ________
        ________
        ________
        ________
        ",
        Side::X,
    )
    .unwrap();
    let heavy = EvalWeights { king: 50, pawn: 1 };

    let default = MinimaxEngine::new().search(&board, SearchLimits::depth(1));
    let weighted = MinimaxEngine::with_weights(heavy).search(&board, SearchLimits::depth(1));

    assert!(weighted.score > default.score);
}
