mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::error::ChessError;
use super::{Color, GameState, GameStatus, Move, MoveList, Piece, Square};

impl GameState {
    /// Pseudo-legal moves of the piece on `from`.
    ///
    /// A rook lists only its own castling move; the king lists both.
    fn generate_piece_moves(
        &mut self,
        from: Square,
        color: Color,
        piece: Piece,
    ) -> Result<MoveList, ChessError> {
        match piece {
            Piece::Pawn => self.board.generate_pawn_moves(from, color),
            Piece::Knight => self.board.generate_knight_moves(from, color),
            Piece::Bishop => self
                .board
                .generate_slider_moves(from, color, SliderType::Bishop),
            Piece::Rook => {
                let mut moves = self
                    .board
                    .generate_slider_moves(from, color, SliderType::Rook)?;
                if from.row() == color.home_row() {
                    for castle in self.generate_castling_moves(color)? {
                        if castle.from == from {
                            moves.push(castle)?;
                        }
                    }
                }
                Ok(moves)
            }
            Piece::Queen => self
                .board
                .generate_slider_moves(from, color, SliderType::Queen),
            Piece::King => self.generate_king_moves(from, color),
        }
    }

    /// Drop moves that leave `color`'s king attacked, and degenerate ones
    fn filter_legal(&mut self, moves: MoveList, color: Color) -> Result<MoveList, ChessError> {
        let mut legal = MoveList::new();
        for m in moves {
            if m.is_degenerate() {
                continue;
            }
            let safe = {
                let child = self.play(&m);
                !child.board.is_attacked(color)
            };
            if safe {
                legal.push(m)?;
            }
        }
        Ok(legal)
    }

    /// Legal moves of the piece on `square`, in generation order.
    ///
    /// A king lists both castling moves open to it; a rook lists only its
    /// own. An empty square yields no moves.
    pub fn moves_for_piece(&mut self, square: Square) -> Result<MoveList, ChessError> {
        self.piece_moves(square, true)
    }

    fn piece_moves(&mut self, square: Square, king_castles: bool) -> Result<MoveList, ChessError> {
        let Some((color, piece)) = self.board.piece_at(square) else {
            return Ok(MoveList::new());
        };
        let mut pseudo = self.generate_piece_moves(square, color, piece)?;
        if piece == Piece::King && !king_castles {
            pseudo.retain(|m| !m.is_castling());
        }
        self.filter_legal(pseudo, color)
    }

    /// Every legal move for `color`, square by square in column-major order.
    ///
    /// Each castling move appears once, under its rook. The board and
    /// castling rights are unchanged when this returns, on success or error.
    pub fn legal_moves(&mut self, color: Color) -> Result<MoveList, ChessError> {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            if self.board.color_on(sq) == Some(color) {
                moves.append(self.piece_moves(sq, false)?)?;
            }
        }
        Ok(moves)
    }

    /// True if `m` is one of `color`'s legal moves, special tag included
    pub fn is_legal_move(&mut self, m: &Move, color: Color) -> Result<bool, ChessError> {
        if !m.is_valid() || self.board.color_on(m.from) != Some(color) {
            return Ok(false);
        }
        Ok(self.moves_for_piece(m.from)?.contains(m))
    }

    /// Classify the position for `color`, the side to move
    pub fn game_status(&mut self, color: Color) -> Result<GameStatus, ChessError> {
        let in_check = self.board.is_attacked(color);
        let has_moves = !self.legal_moves(color)?.is_empty();
        Ok(match (has_moves, in_check) {
            (true, false) => GameStatus::Continue,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Checkmate {
                winner: color.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
        })
    }
}
