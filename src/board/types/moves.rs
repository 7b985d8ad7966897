//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::ChessError;

/// Special handling attached to a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Special {
    #[default]
    Normal,
    /// Castling; the move's squares are the rook's start and end
    Castle,
    /// Pawn promotion to the given kind
    Promote(Piece),
}

/// A move from one square to another.
///
/// `score` is scratch space for the search and does not take part in
/// equality or hashing.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub special: Special,
    pub(crate) score: i32,
}

impl Move {
    /// Create a plain move (no castling, no promotion)
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move::with_special(from, to, Special::Normal)
    }

    /// Create a castling move, given the rook's start and end squares
    #[inline]
    #[must_use]
    pub const fn castle(rook_from: Square, rook_to: Square) -> Self {
        Move::with_special(rook_from, rook_to, Special::Castle)
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move::with_special(from, to, Special::Promote(piece))
    }

    #[inline]
    #[must_use]
    pub const fn with_special(from: Square, to: Square, special: Special) -> Self {
        Move {
            from,
            to,
            special,
            score: 0,
        }
    }

    /// Returns true if this move is castling
    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.special, Special::Castle)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promoted_to(&self) -> Option<Piece> {
        match self.special {
            Special::Promote(piece) => Some(piece),
            _ => None,
        }
    }

    /// Score assigned by the last search that produced this move
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// True if both squares are on the board, origin differs from
    /// destination, and any promotion names a legal promotion kind.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if !self.from.is_valid() || !self.to.is_valid() || self.is_degenerate() {
            return false;
        }
        match self.special {
            Special::Promote(piece) => piece.is_promotion_target(),
            _ => true,
        }
    }

    /// A move that does not travel
    #[inline]
    #[must_use]
    pub(crate) fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.special == other.special
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.special.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        match self.special {
            Special::Normal => {}
            Special::Castle => write!(f, " castle")?,
            Special::Promote(piece) => write!(f, "={}", piece.to_char().to_ascii_uppercase())?,
        }
        write!(f, " score {})", self.score)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            Special::Castle => write!(f, "castle {}", self.from),
            Special::Normal => write!(f, "{} to {}", self.from, self.to),
            Special::Promote(piece) => write!(f, "{} to {} {}", self.from, self.to, piece.name()),
        }
    }
}

/// Ordered, growable list of moves.
///
/// Growth goes through [`MoveList::push`], which reports allocation failure
/// as [`ChessError::ResourceExhausted`] instead of aborting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Append a move
    pub fn push(&mut self, mv: Move) -> Result<(), ChessError> {
        self.moves.try_reserve(1)?;
        self.moves.push(mv);
        Ok(())
    }

    /// Move every entry of `other` to the end of this list
    pub fn append(&mut self, other: MoveList) -> Result<(), ChessError> {
        self.moves.try_reserve(other.len())?;
        self.moves.extend(other.moves);
        Ok(())
    }

    /// Remove exactly one move equal to `mv`; returns whether one was found
    pub fn remove(&mut self, mv: &Move) -> bool {
        match self.moves.iter().position(|m| m == mv) {
            Some(idx) => {
                self.moves.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Keep only the moves matching `keep`
    pub fn retain<F: FnMut(&Move) -> bool>(&mut self, keep: F) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Find the stored move equal to `mv` (carrying its score)
    #[must_use]
    pub fn find(&self, mv: &Move) -> Option<&Move> {
        self.moves.iter().find(|m| *m == mv)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_not_identity() {
        let mut a = Move::new(Square(4, 1), Square(4, 3));
        let b = Move::new(Square(4, 1), Square(4, 3));
        a.score = 17;
        assert_eq!(a, b);
    }

    #[test]
    fn test_special_is_identity() {
        let plain = Move::new(Square(0, 6), Square(0, 7));
        let queen = Move::promotion(Square(0, 6), Square(0, 7), Piece::Queen);
        let knight = Move::promotion(Square(0, 6), Square(0, 7), Piece::Knight);
        assert_ne!(plain, queen);
        assert_ne!(queen, knight);
    }

    #[test]
    fn test_validity() {
        assert!(Move::new(Square(1, 0), Square(2, 2)).is_valid());
        assert!(!Move::new(Square(1, 0), Square(1, 0)).is_valid());
        assert!(!Move::new(Square(1, 0), Square(8, 2)).is_valid());
        assert!(!Move::promotion(Square(0, 6), Square(0, 7), Piece::King).is_valid());
    }

    #[test]
    fn test_remove_takes_exactly_one() {
        let mv = Move::new(Square(0, 1), Square(0, 2));
        let mut list = MoveList::new();
        list.push(mv).unwrap();
        list.push(mv).unwrap();
        list.push(Move::new(Square(1, 1), Square(1, 2))).unwrap();

        assert!(list.remove(&mv));
        assert_eq!(list.len(), 2);
        assert!(list.contains(&mv));
        assert!(list.remove(&mv));
        assert!(!list.remove(&mv));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_append_preserves_order() {
        let a = Move::new(Square(0, 1), Square(0, 2));
        let b = Move::new(Square(1, 1), Square(1, 2));
        let mut first = MoveList::new();
        first.push(a).unwrap();
        let mut second = MoveList::new();
        second.push(b).unwrap();
        first.append(second).unwrap();
        assert_eq!(first.as_slice(), &[a, b]);
    }

    #[test]
    fn test_display() {
        let castle = Move::castle(Square(7, 0), Square(5, 0));
        assert_eq!(castle.to_string(), "castle h1");
        let promo = Move::promotion(Square(0, 6), Square(1, 7), Piece::Knight);
        assert_eq!(promo.to_string(), "a7 to b8 knight");
    }
}
