use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, GameState, Piece, Square};

const CASTLING_LETTERS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::Right),
    ('Q', Color::White, CastleSide::Left),
    ('k', Color::Black, CastleSide::Right),
    ('q', Color::Black, CastleSide::Left),
];

impl GameState {
    /// Parse piece placement, side to move and castling from FEN text.
    ///
    /// Fields after the castling field are ignored. A missing castling
    /// letter marks that rook as moved; rights whose king or rook is away
    /// from its home square are dropped as well.
    pub fn from_fen(fen: &str) -> Result<(GameState, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::all();
        let field = parts.get(2).copied().unwrap_or("-");
        for c in field.chars() {
            if c != '-' && !CASTLING_LETTERS.iter().any(|(l, _, _)| *l == c) {
                return Err(FenError::InvalidCastling { char: c });
            }
        }
        for (letter, color, side) in CASTLING_LETTERS {
            if !field.contains(letter) {
                rights.mark_rook_moved(color, side);
            }
        }

        let mut state = GameState::from_parts(board, rights);
        state.normalize_castling_rights();
        Ok((state, to_move))
    }

    /// FEN text for this state with `to_move` on move (four fields).
    #[must_use]
    pub fn to_fen(&self, to_move: Color) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (0..8).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.board.piece_at(Square(col, row)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let castling: String = CASTLING_LETTERS
            .iter()
            .filter(|(_, color, side)| self.rights.can_castle(*color, *side))
            .map(|(letter, _, _)| *letter)
            .collect();
        let castling = if castling.is_empty() {
            "-".to_string()
        } else {
            castling
        };

        format!("{} {active} {castling} -", rows.join("/"))
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - rank_idx;
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                if col > 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: col,
                    });
                }
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: col + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.set_piece(Square(col, row), color, piece);
            col += 1;
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

    #[test]
    fn test_start_position_round_trip() {
        let (state, to_move) = GameState::from_fen(START).unwrap();
        assert_eq!(state, GameState::new());
        assert_eq!(to_move, Color::White);
        assert_eq!(state.to_fen(to_move), START);
    }

    #[test]
    fn test_missing_letters_drop_rights() {
        let (state, _) = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq -").unwrap();
        assert!(state.rights.can_castle(Color::White, CastleSide::Right));
        assert!(!state.rights.can_castle(Color::White, CastleSide::Left));
        assert!(!state.rights.can_castle(Color::Black, CastleSide::Right));
        assert!(state.rights.can_castle(Color::Black, CastleSide::Left));
    }

    #[test]
    fn test_rights_follow_pieces() {
        // Letters claim rights but the white king is off its square
        let (state, _) = GameState::from_fen("4k3/8/8/8/8/8/8/R2K3R w KQ -").unwrap();
        assert!(!state.rights.can_castle(Color::White, CastleSide::Right));
        assert!(!state.rights.can_castle(Color::White, CastleSide::Left));
    }

    #[test]
    fn test_side_and_castling_fields_optional() {
        let (state, to_move) = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(to_move, Color::Black);
        assert_eq!(state.to_fen(to_move), "4k3/8/8/8/8/8/8/4K3 b - -");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            GameState::from_fen("8/8/8/8").unwrap_err(),
            FenError::TooFewParts { found: 1 }
        );
        assert_eq!(
            GameState::from_fen("8/8/8/8 w").unwrap_err(),
            FenError::InvalidRankCount { found: 4 }
        );
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/7x w").unwrap_err(),
            FenError::InvalidPiece { char: 'x' }
        );
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/8 x").unwrap_err(),
            FenError::InvalidSideToMove {
                found: "x".to_string()
            }
        );
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/8 w KX").unwrap_err(),
            FenError::InvalidCastling { char: 'X' }
        );
        assert!(matches!(
            GameState::from_fen("8/8/8/8/8/8/8/44k w"),
            Err(FenError::TooManyFiles { rank: 7, .. })
        ));
    }
}
