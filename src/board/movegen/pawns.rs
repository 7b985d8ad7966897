use super::super::error::ChessError;
use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
    ) -> Result<MoveList, ChessError> {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let promoting = from.row() == color.pawn_penultimate_row();

        let Some(forward_sq) = from.offset(0, dir) else {
            return Ok(moves);
        };

        if self.is_empty(forward_sq) {
            push_pawn_move(&mut moves, from, forward_sq, promoting)?;
            if from.row() == color.pawn_start_row() {
                if let Some(double_sq) = forward_sq.offset(0, dir) {
                    if self.is_empty(double_sq) {
                        moves.push(Move::new(from, double_sq))?;
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target_sq) = from.offset(dc, dir) {
                if matches!(self.color_on(target_sq), Some(c) if c != color) {
                    push_pawn_move(&mut moves, from, target_sq, promoting)?;
                }
            }
        }

        Ok(moves)
    }
}

/// A plain move, or one promotion per kind when leaving the penultimate row
fn push_pawn_move(
    moves: &mut MoveList,
    from: Square,
    to: Square,
    promoting: bool,
) -> Result<(), ChessError> {
    if promoting {
        for piece in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, piece))?;
        }
        Ok(())
    } else {
        moves.push(Move::new(from, to))
    }
}

impl Move {
    /// True if this is an untagged pawn move onto the last row.
    ///
    /// Collaborators use it to attach a promotion choice (usually queen)
    /// before validating the move.
    #[must_use]
    pub fn is_promotion_candidate(&self, board: &Board) -> bool {
        match board.piece_at(self.from) {
            Some((color, Piece::Pawn)) => {
                self.promoted_to().is_none() && self.to.row() == color.pawn_promotion_row()
            }
            _ => false,
        }
    }
}
