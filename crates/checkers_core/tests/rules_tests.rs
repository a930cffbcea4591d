//! Whole-game rule checks
//!
//! - Board construction and invariants
//! - Capture and chain bookkeeping across a self-played game
//! - Game end detection

use checkers_core::{
    Board, CheckersError, GameStatus, Piece, PieceKind, Side, best_move, legal_moves, sq,
};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_populate_places_twelve_per_side_on_dark_squares() {
    let b = Board::new();
    assert_eq!(b.turn(), Side::X);
    assert_eq!(b.pending_chain(), None);
    for side in Side::ALL {
        assert_eq!(b.count(side), 12);
    }
    for (s, pc) in b.occupied() {
        assert!(s.is_dark(), "{s} is a light square");
        assert_eq!(pc.kind, PieceKind::Pawn);
        match pc.side {
            Side::O => assert!(s.row < 3),
            Side::X => assert!(s.row >= 5),
        }
    }
    assert!(b.check_invariants().is_ok());
}

#[test]
fn test_clone_is_independent() {
    let b = Board::new();
    let mut copy = b.clone();
    copy.set_piece(sq(5, 0), None);
    copy.flip_turn();
    assert_eq!(b.piece_at(sq(5, 0)), Some(Piece::pawn(Side::X)));
    assert_eq!(b.turn(), Side::X);
    assert_eq!(copy.turn(), Side::O);
}

#[test]
fn test_diagram_errors() {
    assert!(matches!(
        Board::from_diagram("x_______", Side::X),
        Err(CheckersError::InvalidDiagram(_))
    ));
    let light = "x_______\n".repeat(8);
    assert!(matches!(
        Board::from_diagram(&light, Side::X),
        Err(CheckersError::InvalidDiagram(_))
    ));
    let unknown = "_q______\n".to_string() + &"________\n".repeat(7);
    assert!(Board::from_diagram(&unknown, Side::X).is_err());
}

#[test]
fn test_pending_chain_must_be_own_piece() {
    let b = Board::new();
    // a7 holds an o pawn while x is to move
    let err = b.clone().with_pending_chain(sq(1, 0)).unwrap_err();
    assert!(matches!(err, CheckersError::InvalidTurnState(_)));
    assert!(!err.is_recoverable());
    // empty square
    assert!(b.clone().with_pending_chain(sq(4, 1)).is_err());
    assert!(b.with_pending_chain(sq(5, 0)).is_ok());
}

// =============================================================================
// Self-play
// =============================================================================

#[test]
fn test_self_play_keeps_invariants() {
    let mut board = Board::new();
    for _ply in 0..120 {
        let moves = legal_moves(&board);
        if moves.is_empty() {
            assert!(board.is_game_over());
            break;
        }
        let mv = best_move(&board, 2).expect("legal moves exist");
        assert!(moves.contains(&mv));

        let had_jump = board.is_jump(mv.from, mv.to);
        if had_jump {
            assert!(
                moves.iter().all(|m| board.is_jump(m.from, m.to)),
                "quiet moves offered while a capture exists"
            );
        }
        let captured = board.captured_square(mv.from, mv.to);
        let mover = board.turn();
        let before = board.count(mover.other());

        let next = board.make_move(mv).expect("best move is legal");
        next.check_invariants().expect("invariants hold after every move");

        if had_jump {
            let cap = captured.expect("jump has a captured square");
            assert_eq!(next.piece_at(cap), None);
            assert_eq!(next.count(mover.other()), before - 1);
        } else {
            assert_eq!(next.count(mover.other()), before);
            assert_eq!(next.turn(), mover.other());
        }
        if next.turn() == mover {
            assert_eq!(next.pending_chain(), Some(mv.to));
            assert!(legal_moves(&next).iter().all(|m| m.from == mv.to));
        }
        board = next;
    }
}

#[test]
fn test_game_over_when_side_has_no_pieces() {
    let mut b = Board::empty(Side::O);
    b.set_piece(sq(4, 3), Some(Piece::king(Side::X)));
    assert_eq!(b.status(), GameStatus::Won(Side::X));
}
