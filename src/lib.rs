pub mod board;

pub use board::{Board, Color, GameState, GameStatus, Move, Piece, Square};
