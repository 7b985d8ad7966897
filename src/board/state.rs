use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::{CastleSide, CastlingRights, Color, Piece, Square};

/// Contents of one board cell.
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 grid of cells indexed `[col][row]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Cell; 8]; 8],
}

impl Board {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(col, 0), Color::White, *piece);
            board.set_piece(Square(col, 7), Color::Black, *piece);
            board.set_piece(Square(col, 1), Color::White, Piece::Pawn);
            board.set_piece(Square(col, 6), Color::Black, Piece::Pawn);
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.squares[sq.0][sq.1] = cell;
    }

    /// Empty a square, returning what was on it
    pub fn clear(&mut self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1].take()
    }

    /// Copy of one row, column by column
    pub(crate) fn row(&self, row: usize) -> [Cell; 8] {
        std::array::from_fn(|col| self.squares[col][row])
    }

    pub(crate) fn restore_row(&mut self, row: usize, cells: &[Cell; 8]) {
        for (col, cell) in cells.iter().enumerate() {
            self.squares[col][row] = *cell;
        }
    }

    /// First square (in column-major order) holding `color`'s king
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Piece census indexed `[color][piece]`
    #[must_use]
    pub fn count_pieces(&self) -> [[u32; 6]; 2] {
        let mut counts = [[0u32; 6]; 2];
        for (color, piece) in self.squares.iter().flatten().flatten() {
            counts[color.index()][piece.index()] += 1;
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{}|", row + 1)?;
            for col in 0..8 {
                let c = match self.squares[col][row] {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

/// Board and castling rights, the state shared by generation and search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    pub rights: CastlingRights,
}

impl GameState {
    /// Standard starting position with every castling right
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            rights: CastlingRights::all(),
        }
    }

    #[must_use]
    pub const fn from_parts(board: Board, rights: CastlingRights) -> Self {
        GameState { board, rights }
    }

    /// Mark lost every right whose king or rook is not on its home square.
    pub fn normalize_castling_rights(&mut self) {
        for color in Color::BOTH {
            let row = color.home_row();
            if self.board.piece_at(Square(4, row)) != Some((color, Piece::King)) {
                self.rights.mark_king_moved(color);
            }
            for side in CastleSide::BOTH {
                let rook_sq = Square(side.rook_col(), row);
                if self.board.piece_at(rook_sq) != Some((color, Piece::Rook)) {
                    self.rights.mark_rook_moved(color, side);
                }
            }
        }
    }

    /// Check the position can start a game with `to_move` on move.
    ///
    /// Each color needs exactly one king, and the side that is not on move
    /// must not be in check.
    pub fn validate_setup(&self, to_move: Color) -> Result<(), SetupError> {
        let counts = self.board.count_pieces();
        for color in Color::BOTH {
            let found = counts[color.index()][Piece::King.index()] as usize;
            if found != 1 {
                return Err(SetupError::KingCount { color, found });
            }
        }
        let waiting = to_move.opponent();
        if self.board.is_attacked(waiting) {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }
        Ok(())
    }
}

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Continue,
    Check,
    /// The side to move is mated; the named color won
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Continue => write!(f, "continue"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}
