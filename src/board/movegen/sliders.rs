use super::super::attacks::{DIAGONALS, ORTHOGONALS};
use super::super::error::ChessError;
use super::super::{Board, Color, Move, MoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [[(isize, isize); 4]] {
        match self {
            SliderType::Bishop => &[DIAGONALS],
            SliderType::Rook => &[ORTHOGONALS],
            SliderType::Queen => &[ORTHOGONALS, DIAGONALS],
        }
    }
}

impl Board {
    /// Walk each ray until blocked, including a capture square
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Result<MoveList, ChessError> {
        let mut moves = MoveList::new();
        for &(dc, dr) in slider.directions().iter().flatten() {
            let mut sq = from;
            while let Some(to) = sq.offset(dc, dr) {
                match self.color_on(to) {
                    None => moves.push(Move::new(from, to))?,
                    Some(c) => {
                        if c != color {
                            moves.push(Move::new(from, to))?;
                        }
                        break;
                    }
                }
                sq = to;
            }
        }
        Ok(moves)
    }
}
