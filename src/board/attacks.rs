//! Check detection and the leaper offset tables shared with move generation.

use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn leaper_table(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    (0..64)
        .map(|idx| {
            let from = Square::from_index(idx);
            deltas
                .iter()
                .filter_map(|&(dc, dr)| from.offset(dc, dr))
                .collect()
        })
        .collect()
}

/// Knight destinations for each square, indexed by `Square::as_index`
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

/// King destinations for each square, indexed by `Square::as_index`
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    let deltas: Vec<(isize, isize)> = DIAGONALS.iter().chain(&ORTHOGONALS).copied().collect();
    leaper_table(&deltas)
});

impl Board {
    /// First occupied square along a ray, with its distance in steps
    fn first_on_ray(
        &self,
        from: Square,
        (dc, dr): (isize, isize),
    ) -> Option<(Square, usize, (Color, Piece))> {
        let mut sq = from;
        let mut steps = 0;
        while let Some(next) = sq.offset(dc, dr) {
            steps += 1;
            if let Some(cell) = self.piece_at(next) {
                return Some((next, steps, cell));
            }
            sq = next;
        }
        None
    }

    /// True if the king of `color` can be captured by the opponent.
    ///
    /// A board without a king of that color is never in check.
    #[must_use]
    pub fn is_attacked(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        let enemy = color.opponent();
        let pawn_row = king.row() as isize + color.pawn_direction();

        for dir in DIAGONALS {
            if let Some((sq, steps, (c, piece))) = self.first_on_ray(king, dir) {
                if c != enemy {
                    continue;
                }
                let hit = match piece {
                    Piece::Bishop | Piece::Queen => true,
                    Piece::King => steps == 1,
                    Piece::Pawn => steps == 1 && sq.row() as isize == pawn_row,
                    _ => false,
                };
                if hit {
                    return true;
                }
            }
        }

        for dir in ORTHOGONALS {
            if let Some((_, steps, (c, piece))) = self.first_on_ray(king, dir) {
                if c != enemy {
                    continue;
                }
                let hit = match piece {
                    Piece::Rook | Piece::Queen => true,
                    Piece::King => steps == 1,
                    _ => false,
                };
                if hit {
                    return true;
                }
            }
        }

        KNIGHT_TARGETS[king.as_index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((enemy, Piece::Knight)))
    }
}
