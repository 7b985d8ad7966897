//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (column, row) board coordinate
//! - `Move`, `Special` and `MoveList` - move representation
//! - `CastlingRights` - the six castling flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList, Special};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
