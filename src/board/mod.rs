//! Chess board representation, move rules and minimax search.
//!
//! The board is an 8x8 grid indexed by (column, row). Move generation
//! covers castling and promotion; the search plays either to a fixed depth
//! or until a node budget is spent.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Color, GameState};
//!
//! let mut state = GameState::new();
//! let moves = state.legal_moves(Color::White).unwrap();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{ChessError, FenError, SetupError, SquareError};
pub use state::{Board, Cell, GameState, GameStatus};
pub use types::{CastleSide, CastlingRights, Color, Move, MoveList, Piece, Special, Square};

// Public API - evaluation and search
pub use eval::{ScoringMode, DEFAULT_WIN_BONUS_HORIZON, DRAW_SCORE, SCALE_FACTOR, WIN_SCORE};
pub use search::{
    best_move_list, find_best_move, score_of_move, Search, SearchConfig, SearchDepth,
    SearchStats, DEFAULT_MIN_PLY, DEFAULT_NODE_BUDGET, MAX_FIXED_DEPTH, MIN_FIXED_DEPTH,
};

// Make/unmake internals for callers driving their own search
pub use make_unmake::{MoveGuard, UnmakeInfo};

pub(crate) use types::PROMOTION_PIECES;
