//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Castling, promotion and end-of-game positions
//! - `search.rs` - Minimax search behaviour
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod proptest;

use crate::board::{Color, GameState, Move, MoveList, Square};

/// Parse a FEN that the test knows to be well formed
pub(crate) fn state_from_fen(fen: &str) -> (GameState, Color) {
    GameState::from_fen(fen).expect("test FEN should parse")
}

/// The legal move of `color` from `from` to `to` with no special tag,
/// or the castling move whose rook starts on `from`
pub(crate) fn find_move(state: &mut GameState, color: Color, from: Square, to: Square) -> Move {
    let moves: MoveList = state.legal_moves(color).expect("move generation");
    *moves
        .iter()
        .find(|m| m.from == from && m.to == to && m.promoted_to().is_none())
        .expect("expected move not found")
}
