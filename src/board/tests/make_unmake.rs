//! Make/unmake move tests.

use super::{find_move, state_from_fen};
use crate::board::error::ChessError;
use crate::board::{CastleSide, Color, GameState, Move, Piece, Square};

#[test]
fn test_capture_make_unmake() {
    let (mut state, _) = state_from_fen("4k3/8/3p4/8/4N3/8/8/4K3 w - -");
    let original = state;
    let mv = find_move(&mut state, Color::White, Square(4, 3), Square(3, 5));

    let info = state.make_move(&mv);
    assert_eq!(
        state.board.piece_at(Square(3, 5)),
        Some((Color::White, Piece::Knight))
    );
    assert!(state.board.is_empty(Square(4, 3)));

    state.unmake_move(&mv, info);
    assert_eq!(state, original);
}

#[test]
fn test_right_castle_make_unmake() {
    let (mut state, _) = state_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    let original = state;
    let mv = Move::castle(Square(7, 0), Square(5, 0));
    assert!(state.is_legal_move(&mv, Color::White).unwrap());

    let info = state.make_move(&mv);
    assert_eq!(
        state.board.piece_at(Square(5, 0)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(
        state.board.piece_at(Square(6, 0)),
        Some((Color::White, Piece::King))
    );
    assert!(state.board.is_empty(Square(4, 0)));
    assert!(state.board.is_empty(Square(7, 0)));
    assert!(state.rights.king_moved(Color::White));
    assert!(!state.rights.king_moved(Color::Black));

    state.unmake_move(&mv, info);
    assert_eq!(state, original);
}

#[test]
fn test_left_castle_make_unmake() {
    let (mut state, _) = state_from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq -");
    let original = state;
    let mv = Move::castle(Square(0, 7), Square(3, 7));
    assert!(state.is_legal_move(&mv, Color::Black).unwrap());

    let info = state.make_move(&mv);
    assert_eq!(
        state.board.piece_at(Square(3, 7)),
        Some((Color::Black, Piece::Rook))
    );
    assert_eq!(
        state.board.piece_at(Square(2, 7)),
        Some((Color::Black, Piece::King))
    );
    assert!(!state.rights.can_castle(Color::Black, CastleSide::Right));
    assert!(!state.rights.can_castle(Color::Black, CastleSide::Left));

    state.unmake_move(&mv, info);
    assert_eq!(state, original);
}

#[test]
fn test_promotion_make_unmake() {
    let (mut state, _) = state_from_fen("4k3/P7/8/8/8/8/8/4K3 w - -");
    let original = state;
    let mv = Move::promotion(Square(0, 6), Square(0, 7), Piece::Queen);

    let info = state.make_move(&mv);
    assert_eq!(
        state.board.piece_at(Square(0, 7)),
        Some((Color::White, Piece::Queen))
    );

    state.unmake_move(&mv, info);
    assert_eq!(state, original);
    assert_eq!(
        state.board.piece_at(Square(0, 6)),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_rook_capture_updates_only_mover_rights() {
    // White rook takes the black rook on h8
    let (mut state, _) = state_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -");
    let mv = Move::new(Square(7, 0), Square(7, 7));
    let info = state.make_move(&mv);
    assert!(state.rights.rook_moved(Color::White, CastleSide::Right));
    assert!(!state.rights.rook_moved(Color::Black, CastleSide::Right));
    state.unmake_move(&mv, info);
    assert!(!state.rights.rook_moved(Color::White, CastleSide::Right));
}

#[test]
fn test_guard_restores_on_drop() {
    let mut state = GameState::new();
    let original = state;
    let first = Move::new(Square(4, 1), Square(4, 3));
    let reply = Move::new(Square(4, 6), Square(4, 4));
    {
        let mut played = state.play(&first);
        assert_eq!(
            played.board.piece_at(Square(4, 3)),
            Some((Color::White, Piece::Pawn))
        );
        let answered = played.play(&reply);
        assert_eq!(
            answered.board.piece_at(Square(4, 4)),
            Some((Color::Black, Piece::Pawn))
        );
    }
    assert_eq!(state, original);
}

fn fail_inside(state: &mut GameState, mv: &Move) -> Result<(), ChessError> {
    let played = state.play(mv);
    if played.rights.king_moved(Color::White) {
        return Err(ChessError::ResourceExhausted {
            context: "test failure",
        });
    }
    Ok(())
}

#[test]
fn test_guard_restores_on_error() {
    let (mut state, _) = state_from_fen("4k3/8/8/8/8/8/8/4K3 w - -");
    let original = state;
    let result = fail_inside(&mut state, &Move::new(Square(4, 0), Square(4, 1)));
    assert!(result.is_err());
    assert_eq!(state, original);
}

#[test]
fn test_apply_move_commits() {
    let (mut state, _) = state_from_fen("4k3/8/8/8/8/8/8/4K3 w - -");
    assert!(!state.rights.king_moved(Color::White));
    state.apply_move(&Move::new(Square(4, 0), Square(4, 1)));
    assert!(state.rights.king_moved(Color::White));
    assert_eq!(
        state.board.piece_at(Square(4, 1)),
        Some((Color::White, Piece::King))
    );
}
