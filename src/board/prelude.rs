//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, CastlingRights, ChessError, Color, GameState, GameStatus,
    Move, MoveList, Piece, Search, SearchConfig, SearchDepth, Special, Square,
};
