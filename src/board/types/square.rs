//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (column, row).
///
/// Column 0 is the a-file and row 0 is White's home row. The fields are public
/// so callers can describe off-board coordinates; [`Square::is_valid`] tells
/// them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (col, row)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(col: usize, row: usize) -> Option<Self> {
        let sq = Square(col, row);
        sq.is_valid().then_some(sq)
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0
    }

    /// Get the row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.1
    }

    /// True iff both coordinates lie on the board
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Step by a (column, row) delta, returning `None` when leaving the board
    #[inline]
    #[must_use]
    pub fn offset(self, dc: isize, dr: isize) -> Option<Square> {
        let col = self.0.checked_add_signed(dc)?;
        let row = self.1.checked_add_signed(dr)?;
        Square::new(col, row)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }

    /// Iterate over all 64 squares, column by column
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|col| (0..8).map(move |row| Square(col, row)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
        } else {
            write!(f, "({},{})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (usize, usize)) -> Result<Self, Self::Error> {
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Square(col, row))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(col, row))
    }
}
