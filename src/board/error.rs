//! Error types for board, move generation and search operations.

use std::collections::TryReserveError;
use std::fmt;

/// Failure of a move generation or search call.
///
/// Board and castling state are always restored before one of these reaches
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A move list could not grow, or the search went past its move limit
    ResourceExhausted { context: &'static str },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::ResourceExhausted { context } => {
                write!(f, "Resource exhausted: {context}")
            }
        }
    }
}

impl std::error::Error for ChessError {}

impl From<TryReserveError> for ChessError {
    fn from(_: TryReserveError) -> Self {
        ChessError::ResourceExhausted {
            context: "move list allocation failed",
        }
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in position string
    InvalidRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN must describe 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Reasons a position cannot start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A color does not have exactly one king
    KingCount { color: super::Color, found: usize },
    /// The side that just moved could capture the enemy king
    OpponentInCheck { color: super::Color },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            SetupError::OpponentInCheck { color } => {
                write!(f, "{color} king is in check but it is not {color}'s turn")
            }
        }
    }
}

impl std::error::Error for SetupError {}
