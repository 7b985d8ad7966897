//! Fluent builder for constructing game states.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let state = BoardBuilder::new()
//!     .piece(Square(4, 0), Color::White, Piece::King)
//!     .piece(Square(4, 7), Color::Black, Piece::King)
//!     .piece(Square(0, 1), Color::White, Piece::Pawn)
//!     .build();
//! assert!(state.validate_setup(Color::White).is_ok());
//! ```

use super::error::SetupError;
use super::{Board, CastleSide, CastlingRights, Color, GameState, Piece, Square};

/// A fluent builder for [`GameState`] positions.
///
/// Castling rights default to none; rights granted with the builder are
/// still dropped for any king or rook away from its home square.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    rights: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            rights: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
            rights: CastlingRights::all(),
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.rights = rights;
        self
    }

    /// Allow castling with the given rook.
    #[must_use]
    pub fn allow_castle(mut self, color: Color, side: CastleSide) -> Self {
        self.rights.grant(color, side);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.rights = CastlingRights::none();
        self
    }

    /// Build the state, normalizing castling rights to the pieces placed.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut state = GameState::from_parts(self.board, self.rights);
        state.normalize_castling_rights();
        state
    }

    /// Build and check the position can start a game with `to_move` on move.
    pub fn try_build(self, to_move: Color) -> Result<GameState, SetupError> {
        let state = self.build();
        state.validate_setup(to_move)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        assert_eq!(BoardBuilder::starting_position().build(), GameState::new());
    }

    #[test]
    fn test_empty_board() {
        let state = BoardBuilder::new()
            .piece(Square(4, 0), Color::White, Piece::King)
            .piece(Square(4, 7), Color::Black, Piece::King)
            .build();

        assert!(state.board.piece_at(Square(4, 0)).is_some());
        assert!(state.board.piece_at(Square(4, 7)).is_some());
        assert!(state.board.piece_at(Square(0, 0)).is_none());
        assert_eq!(state.rights, CastlingRights::none());
    }

    #[test]
    fn test_allow_castle() {
        let state = BoardBuilder::starting_position()
            .no_castling_rights()
            .allow_castle(Color::White, CastleSide::Right)
            .build();

        assert!(state.rights.can_castle(Color::White, CastleSide::Right));
        assert!(!state.rights.can_castle(Color::White, CastleSide::Left));
        assert!(!state.rights.can_castle(Color::Black, CastleSide::Right));
        assert!(!state.rights.can_castle(Color::Black, CastleSide::Left));
    }

    #[test]
    fn test_clear_square_drops_right() {
        let state = BoardBuilder::starting_position()
            .clear(Square(0, 0))
            .build();

        assert!(state.board.piece_at(Square(0, 0)).is_none());
        assert!(state.board.piece_at(Square(1, 0)).is_some());
        assert!(!state.rights.can_castle(Color::White, CastleSide::Left));
        assert!(state.rights.can_castle(Color::White, CastleSide::Right));
    }

    #[test]
    fn test_try_build_validates() {
        let missing_king = BoardBuilder::new()
            .piece(Square(4, 0), Color::White, Piece::King)
            .try_build(Color::White);
        assert_eq!(
            missing_king.unwrap_err(),
            SetupError::KingCount {
                color: Color::Black,
                found: 0
            }
        );

        // Black is in check with White to move
        let waiting_in_check = BoardBuilder::new()
            .piece(Square(4, 0), Color::White, Piece::King)
            .piece(Square(4, 7), Color::Black, Piece::King)
            .piece(Square(4, 3), Color::White, Piece::Rook)
            .try_build(Color::White);
        assert_eq!(
            waiting_in_check.unwrap_err(),
            SetupError::OpponentInCheck {
                color: Color::Black
            }
        );
    }
}
