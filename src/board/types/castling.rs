//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

pub(crate) const WHITE_KING_MOVED: u8 = 1 << 0;
pub(crate) const WHITE_LEFT_ROOK_MOVED: u8 = 1 << 1;
pub(crate) const WHITE_RIGHT_ROOK_MOVED: u8 = 1 << 2;
pub(crate) const BLACK_KING_MOVED: u8 = 1 << 3;
pub(crate) const BLACK_LEFT_ROOK_MOVED: u8 = 1 << 4;
pub(crate) const BLACK_RIGHT_ROOK_MOVED: u8 = 1 << 5;

/// All six flags combined
pub(crate) const ALL_LOST: u8 = WHITE_KING_MOVED
    | WHITE_LEFT_ROOK_MOVED
    | WHITE_RIGHT_ROOK_MOVED
    | BLACK_KING_MOVED
    | BLACK_LEFT_ROOK_MOVED
    | BLACK_RIGHT_ROOK_MOVED;

/// Which rook a castling move uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Rook on column 0 (queenside)
    Left,
    /// Rook on column 7 (kingside)
    Right,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Right, CastleSide::Left];

    /// Column the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastleSide::Left => 0,
            CastleSide::Right => 7,
        }
    }

    /// Column the rook lands on after castling
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            CastleSide::Left => 3,
            CastleSide::Right => 5,
        }
    }

    /// Columns the king passes through and lands on, in travel order
    #[inline]
    #[must_use]
    pub const fn king_path(self) -> [usize; 2] {
        match self {
            CastleSide::Left => [3, 2],
            CastleSide::Right => [5, 6],
        }
    }

    /// Columns that must be empty between king and rook
    #[must_use]
    pub const fn between(self) -> &'static [usize] {
        match self {
            CastleSide::Left => &[1, 2, 3],
            CastleSide::Right => &[5, 6],
        }
    }

    /// Side whose rook starts on `col`, if any
    #[must_use]
    pub const fn from_rook_col(col: usize) -> Option<CastleSide> {
        match col {
            0 => Some(CastleSide::Left),
            7 => Some(CastleSide::Right),
            _ => None,
        }
    }
}

/// Castling state as six "has moved" flags.
///
/// A set flag means the corresponding right is lost. `Default` is the
/// opening state with every right available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Every right available (nothing has moved)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0)
    }

    /// Every right lost
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(ALL_LOST)
    }

    /// Has this color's king moved?
    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    /// Has this color's rook on `side` moved?
    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    /// True if neither the king nor the rook on `side` has moved
    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// Make castling with the rook on `side` available again.
    ///
    /// Only for setting up positions; moves never restore a right.
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 &= !(Self::king_bit(color) | Self::rook_bit(color, side));
    }

    /// Record that `piece` of `color` moved away from `from`.
    ///
    /// A king always loses both rights; a rook loses its side when leaving
    /// column 0 or 7. Flags are never cleared here.
    pub fn update(&mut self, color: Color, piece: Piece, from: Square) {
        match piece {
            Piece::King => self.mark_king_moved(color),
            Piece::Rook => {
                if from.row() == color.home_row() {
                    if let Some(side) = CastleSide::from_rook_col(from.col()) {
                        self.mark_rook_moved(color, side);
                    }
                }
            }
            _ => {}
        }
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value (unknown bits are dropped)
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_LOST)
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Left) => WHITE_LEFT_ROOK_MOVED,
            (Color::White, CastleSide::Right) => WHITE_RIGHT_ROOK_MOVED,
            (Color::Black, CastleSide::Left) => BLACK_LEFT_ROOK_MOVED,
            (Color::Black, CastleSide::Right) => BLACK_RIGHT_ROOK_MOVED,
        }
    }
}
