//! Static evaluation: material count plus terminal scores.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ChessError;
use super::{Board, Color, GameState, GameStatus};

/// Score of a won position from the winner's side
pub const WIN_SCORE: i32 = 1000;

/// Magnitude of a drawn position; sits just under a win
pub const DRAW_SCORE: i32 = 999;

/// Factor applied to terminal scores in scaled mode
pub const SCALE_FACTOR: i32 = 10;

/// Plies within which a scaled mate earns a proximity bonus
pub const DEFAULT_WIN_BONUS_HORIZON: i32 = 6;

/// Pawn, knight, bishop, rook, queen, king
const MATERIAL_WEIGHTS: [i32; 6] = [1, 3, 3, 5, 9, 400];
const SCALED_WEIGHTS: [i32; 6] = [10, 33, 34, 50, 90, 0];

/// Which weight table and terminal scaling to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoringMode {
    /// Fixed-depth search: plain material, unscaled terminal scores
    Material,
    /// Node-budget search: tenfold weights and terminal scores
    Scaled,
}

impl ScoringMode {
    #[must_use]
    pub const fn weights(self) -> &'static [i32; 6] {
        match self {
            ScoringMode::Material => &MATERIAL_WEIGHTS,
            ScoringMode::Scaled => &SCALED_WEIGHTS,
        }
    }

    /// Multiplier for win and draw scores
    #[must_use]
    pub const fn terminal_factor(self) -> i32 {
        match self {
            ScoringMode::Material => 1,
            ScoringMode::Scaled => SCALE_FACTOR,
        }
    }

    /// The draw score as seen from the side that is to move
    #[must_use]
    pub const fn draw_score(self) -> i32 {
        DRAW_SCORE * self.terminal_factor()
    }
}

impl Board {
    /// Weighted material of `color`
    #[must_use]
    pub fn material(&self, color: Color, mode: ScoringMode) -> i32 {
        let counts = self.count_pieces();
        counts[color.index()]
            .iter()
            .zip(mode.weights())
            .map(|(&n, &w)| n as i32 * w)
            .sum()
    }
}

impl GameState {
    /// Score the position for `perspective` with `to_move` on move.
    ///
    /// Positive is good for `perspective`. A mate is worth [`WIN_SCORE`] for
    /// the winner, a stalemate [`DRAW_SCORE`] signed toward the side to move.
    /// In scaled mode both are multiplied by [`SCALE_FACTOR`], mates gain a
    /// bonus for being found at a shallow `ply`, and bare kings are a draw.
    pub fn evaluate(
        &mut self,
        perspective: Color,
        to_move: Color,
        mode: ScoringMode,
        ply: u32,
    ) -> Result<i32, ChessError> {
        self.evaluate_with_horizon(perspective, to_move, mode, ply, DEFAULT_WIN_BONUS_HORIZON)
    }

    pub(crate) fn evaluate_with_horizon(
        &mut self,
        perspective: Color,
        to_move: Color,
        mode: ScoringMode,
        ply: u32,
        win_bonus_horizon: i32,
    ) -> Result<i32, ChessError> {
        let side_sign = if to_move == perspective { 1 } else { -1 };
        let factor = mode.terminal_factor();

        match self.game_status(to_move)? {
            GameStatus::Checkmate { winner } => {
                let score = WIN_SCORE * factor * if winner == perspective { 1 } else { -1 };
                if mode == ScoringMode::Scaled {
                    let depth = i32::try_from(ply).unwrap_or(i32::MAX);
                    let bonus = win_bonus_horizon.saturating_sub(depth).max(0);
                    Ok(score + bonus * score.signum())
                } else {
                    Ok(score)
                }
            }
            GameStatus::Stalemate => Ok(mode.draw_score() * side_sign),
            GameStatus::Continue | GameStatus::Check => {
                let white = self.board.material(Color::White, mode);
                let black = self.board.material(Color::Black, mode);
                if mode == ScoringMode::Scaled && white == 0 && black == 0 {
                    Ok(mode.draw_score() * side_sign)
                } else {
                    Ok((white - black) * perspective.sign())
                }
            }
        }
    }
}
