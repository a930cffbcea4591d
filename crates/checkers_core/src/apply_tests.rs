use super::*;
use crate::movegen::GameStatus;
use crate::notation::parse_move_input;

fn board(diagram: &str, turn: Side) -> Board {
    Board::from_diagram(diagram, turn).unwrap()
}

#[test]
fn test_opening_quiet_move() {
    let b = Board::new();
    let mv = parse_move_input("3g 4h").unwrap();
    assert_eq!(mv, Move::new(sq(5, 6), sq(4, 7)));
    assert!(b.is_valid_move(mv.from, mv.to));
    assert!(!b.is_jump(mv.from, mv.to));

    let next = b.make_move(mv).unwrap();
    assert_eq!(next.piece_at(sq(5, 6)), None);
    assert_eq!(next.piece_at(sq(4, 7)), Some(Piece::pawn(Side::X)));
    assert_eq!(next.turn(), Side::O);
    assert_eq!(next.pending_chain(), None);
    // The original snapshot is untouched
    assert_eq!(b, Board::new());
}

#[test]
fn test_jump_removes_enemy() {
    let b = board(
        "
        ________
        ________
        ________
        ________
        ___o____
        __x_____
        ________
        ______o_
        ",
        Side::X,
    );
    let from = sq(5, 2);
    assert!(b.available_jumps(from).contains(&sq(3, 4)));

    let next = b.make_move(Move::new(from, sq(3, 4))).unwrap();
    assert_eq!(next.piece_at(sq(4, 3)), None, "jumped square is emptied");
    assert_eq!(next.piece_at(sq(3, 4)), Some(Piece::pawn(Side::X)));
    assert_eq!(next.count(Side::O), 1);
    assert_eq!(next.turn(), Side::O);
}

#[test]
fn test_illegal_move_is_rejected() {
    let b = Board::new();
    let mv = Move::new(sq(5, 0), sq(3, 2));
    assert_eq!(b.make_move(mv), Err(CheckersError::IllegalMove { mv }));
    // Wrong side
    let mv = Move::new(sq(2, 1), sq(3, 0));
    assert!(matches!(
        b.make_move(mv),
        Err(CheckersError::IllegalMove { .. })
    ));
}

#[test]
fn test_quiet_move_rejected_while_capture_exists() {
    let b = board(
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
    );
    // Valid in isolation, illegal because the capture is mandatory
    let quiet = Move::new(sq(5, 6), sq(4, 7));
    assert!(b.is_valid_move(quiet.from, quiet.to));
    assert!(b.make_move(quiet).is_err());
}

#[test]
fn test_chain_keeps_turn_and_restricts_moves() {
    let b = board(
        "
        ________
        ________
        ________
        ____o___
        ________
        __o___o_
        _x___x__
        ________
        ",
        Side::X,
    );
    assert_eq!(legal_moves(&b).len(), 2);

    let mid = b.make_move(Move::new(sq(6, 1), sq(4, 3))).unwrap();
    assert_eq!(mid.turn(), Side::X, "chain does not pass the turn");
    assert_eq!(mid.pending_chain(), Some(sq(4, 3)));
    // The other pawn's capture on f2 is off the table mid-chain
    assert_eq!(legal_moves(&mid), vec![Move::new(sq(4, 3), sq(2, 5))]);
    assert!(
        mid.make_move(Move::new(sq(6, 5), sq(4, 7))).is_err(),
        "only the chaining piece may move"
    );

    let done = mid.make_move(Move::new(sq(4, 3), sq(2, 5))).unwrap();
    assert_eq!(done.turn(), Side::O);
    assert_eq!(done.pending_chain(), None);
    assert_eq!(done.piece_at(sq(3, 4)), None);
    assert_eq!(done.count(Side::O), 1);
}

#[test]
fn test_promotion_on_far_rank() {
    let b = board(
        "
        ________
        __x_____
        _______o
        ________
        ________
        ________
        ________
        ________
        ",
        Side::X,
    );
    let next = b.make_move(Move::new(sq(1, 2), sq(0, 1))).unwrap();
    assert_eq!(next.piece_at(sq(0, 1)), Some(Piece::king(Side::X)));
    assert_eq!(next.turn(), Side::O);

    let o_board = board(
        "
        ________
        ________
        ________
        ________
        ________
        ________
        _o______
        ______x_
        ",
        Side::O,
    );
    let next = o_board.make_move(Move::new(sq(6, 1), sq(7, 2))).unwrap();
    assert_eq!(next.piece_at(sq(7, 2)), Some(Piece::king(Side::O)));
}

#[test]
fn test_king_stays_king() {
    let b = board(
        "
        _X______
        ________
        ________
        ________
        ________
        ________
        ________
        o_______
        ",
        Side::X,
    );
    let next = b.make_move(Move::new(sq(0, 1), sq(3, 4))).unwrap();
    assert_eq!(next.piece_at(sq(3, 4)), Some(Piece::king(Side::X)));
}

#[test]
fn test_promoting_capture_continues_as_king() {
    let b = board(
        "
        ________
        __o_____
        ___x____
        ________
        _____o__
        ________
        ________
        ________
        ",
        Side::X,
    );
    let next = b.make_move(Move::new(sq(2, 3), sq(0, 1))).unwrap();
    assert_eq!(next.piece_at(sq(0, 1)), Some(Piece::king(Side::X)));
    assert_eq!(next.turn(), Side::X);
    assert_eq!(
        legal_moves(&next),
        vec![Move::new(sq(0, 1), sq(5, 6)), Move::new(sq(0, 1), sq(6, 7))]
    );

    let done = next.make_move(Move::new(sq(0, 1), sq(6, 7))).unwrap();
    assert_eq!(done.count(Side::O), 0);
    assert_eq!(done.status(), GameStatus::Won(Side::X));
}

#[test]
fn test_king_jump_removes_the_single_blocker() {
    let b = board(
        "
        ________
        ________
        ________
        ________
        ___o____
        ________
        ________
        X_______
        ",
        Side::X,
    );
    let next = b.make_move(Move::new(sq(7, 0), sq(1, 6))).unwrap();
    assert_eq!(next.piece_at(sq(4, 3)), None);
    assert_eq!(next.piece_at(sq(1, 6)), Some(Piece::king(Side::X)));
    assert_eq!(next.piece_at(sq(7, 0)), None);
    assert_eq!(next.count(Side::O), 0);
}

#[test]
fn test_off_board_move_is_rejected_and_displayable() {
    let b = Board::new();
    let mv = Move::new(Square::new(9, 0), Square::new(8, 1));
    let err = b.make_move(mv).unwrap_err();
    assert_eq!(err, CheckersError::IllegalMove { mv });
    assert!(err.to_string().contains("?9,0"));
}
