//! Property-based tests using proptest.

use crate::board::{Color, GameState, Move, Piece, Square, UnmakeInfo};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: make_move followed by unmake_move restores the state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = state;
        let initial_fen = state.to_fen(Color::White);

        let mut color = Color::White;
        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..num_moves {
            let moves = state.legal_moves(color).unwrap();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            let mv = moves.as_slice()[idx];
            let info = state.make_move(&mv);
            history.push((mv, info));
            color = color.opponent();
        }

        while let Some((mv, info)) = history.pop() {
            state.unmake_move(&mv, info);
        }

        prop_assert_eq!(state, initial);
        prop_assert_eq!(state.to_fen(Color::White), initial_fen);
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_leave_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..num_moves {
            let moves = state.legal_moves(color).unwrap();
            if moves.is_empty() {
                break;
            }
            for m in &moves {
                let played = state.play(m);
                prop_assert!(!played.board.is_attacked(color), "{} leaves the king attacked", m);
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            state.apply_move(&mv);
            color = color.opponent();
        }
    }

    /// Property: a lost castling right never comes back
    #[test]
    fn prop_castling_rights_only_shrink(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let (mut state, mut color) =
            GameState::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq -").unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.legal_moves(color).unwrap();
            if moves.is_empty() {
                break;
            }
            let before = state.rights.as_u8();
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            state.apply_move(&mv);
            let after = state.rights.as_u8();
            prop_assert_eq!(after & before, before, "{} restored a right", mv);
            color = color.opponent();
        }
    }

    /// Property: FEN output parses back to the same state
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..num_moves {
            let moves = state.legal_moves(color).unwrap();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            state.apply_move(&mv);
            color = color.opponent();
        }

        let fen = state.to_fen(color);
        let (parsed, to_move) = GameState::from_fen(&fen).unwrap();
        prop_assert_eq!(parsed.board, state.board);
        prop_assert_eq!(to_move, color);
    }

    /// Property: per-piece move lists add up to the side's full list
    #[test]
    fn prop_piece_lists_cover_legal_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..num_moves {
            let moves = state.legal_moves(color).unwrap();
            if moves.is_empty() {
                break;
            }
            let own: Vec<Square> = Square::all()
                .filter(|&sq| state.board.color_on(sq) == Some(color))
                .collect();
            let mut per_piece = 0;
            for sq in own {
                let is_king = state.board.piece_on(sq) == Some(Piece::King);
                let list = state.moves_for_piece(sq).unwrap();
                for m in &list {
                    prop_assert!(moves.contains(m), "{} missing from the full list", m);
                    // A king's castles are counted under their rooks
                    if !(is_king && m.is_castling()) {
                        per_piece += 1;
                    }
                }
            }
            prop_assert_eq!(per_piece, moves.len());

            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            state.apply_move(&mv);
            color = color.opponent();
        }
    }
}
