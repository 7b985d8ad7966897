use super::super::attacks::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::error::ChessError;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
    ) -> Result<MoveList, ChessError> {
        self.generate_leaper_moves(&KNIGHT_TARGETS[from.as_index()], from, color)
    }

    /// The king's one-step moves; castling is added separately
    pub(crate) fn generate_king_steps(
        &self,
        from: Square,
        color: Color,
    ) -> Result<MoveList, ChessError> {
        self.generate_leaper_moves(&KING_TARGETS[from.as_index()], from, color)
    }

    fn generate_leaper_moves(
        &self,
        targets: &[Square],
        from: Square,
        color: Color,
    ) -> Result<MoveList, ChessError> {
        let mut moves = MoveList::new();
        for &to in targets {
            if self.color_on(to) != Some(color) {
                moves.push(Move::new(from, to))?;
            }
        }
        Ok(moves)
    }
}
