use super::super::error::ChessError;
use super::super::make_unmake::KING_COL;
use super::super::{CastleSide, Color, GameState, Move, MoveList, Piece, Square};

impl GameState {
    /// Castling moves currently open to `color`, right side first.
    ///
    /// Each move carries the rook's start and end squares. The king's path is
    /// tested by placing it on each square it crosses; the home row is put
    /// back before returning.
    pub(crate) fn generate_castling_moves(&mut self, color: Color) -> Result<MoveList, ChessError> {
        let mut moves = MoveList::new();
        let row = color.home_row();
        let king_sq = Square(KING_COL, row);

        if self.board.piece_at(king_sq) != Some((color, Piece::King))
            || self.board.is_attacked(color)
        {
            return Ok(moves);
        }

        for side in CastleSide::BOTH {
            if !self.castle_available(color, side) {
                continue;
            }
            let home_row = self.board.row(row);
            let mut safe = true;
            for col in side.king_path() {
                self.board.clear(king_sq);
                self.board.set_cell(Square(col, row), Some((color, Piece::King)));
                let attacked = self.board.is_attacked(color);
                self.board.restore_row(row, &home_row);
                if attacked {
                    safe = false;
                    break;
                }
            }
            if safe {
                let rook_from = Square(side.rook_col(), row);
                let rook_to = Square(side.rook_target_col(), row);
                moves.push(Move::castle(rook_from, rook_to))?;
            }
        }
        Ok(moves)
    }

    /// Rights intact, rook at home and the squares between empty
    fn castle_available(&self, color: Color, side: CastleSide) -> bool {
        let row = color.home_row();
        self.rights.can_castle(color, side)
            && self.board.piece_at(Square(side.rook_col(), row)) == Some((color, Piece::Rook))
            && side
                .between()
                .iter()
                .all(|&col| self.board.is_empty(Square(col, row)))
    }

    pub(crate) fn generate_king_moves(
        &mut self,
        from: Square,
        color: Color,
    ) -> Result<MoveList, ChessError> {
        let mut moves = self.board.generate_king_steps(from, color)?;
        if from == Square(KING_COL, color.home_row()) {
            moves.append(self.generate_castling_moves(color)?)?;
        }
        Ok(moves)
    }
}
