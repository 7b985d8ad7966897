//! Minimax search with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth search (1 to 4 plies) over plain material scores
//! - Node-budget ("best") search that splits a board allowance across the
//!   branching factor, searching narrow lines deeper than wide ones
//! - Every root move scored with a full window, so ties can be listed
//! - Uniform random choice among tied moves through a caller-supplied `Rng`

mod constants;
mod minimax;
mod params;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::ChessError;
use super::{Color, GameState, Move, MoveList};
use minimax::Node;

pub use constants::{DEFAULT_MIN_PLY, DEFAULT_NODE_BUDGET, MAX_FIXED_DEPTH, MIN_FIXED_DEPTH};
pub use params::{SearchConfig, SearchDepth, SearchStats};

/// A reusable searcher holding its configuration and last statistics.
#[derive(Clone, Debug, Default)]
pub struct Search {
    config: SearchConfig,
    stats: SearchStats,
}

impl Search {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Search {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters of the most recent search call
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Board allowance of each root move
    fn root_budget(&self, depth: SearchDepth, root_moves: usize) -> u64 {
        if depth.is_best() {
            self.config.node_budget / root_moves.max(1) as u64
        } else {
            self.config.node_budget
        }
    }

    /// Every legal move of `computer`, each carrying its searched score.
    ///
    /// The root is never pruned, so every score is exact for the chosen
    /// depth. Fixed depths above [`MAX_FIXED_DEPTH`] search at that depth.
    /// Returns an empty list when `computer` has no legal move.
    pub fn scored_root_moves(
        &mut self,
        state: &mut GameState,
        depth: SearchDepth,
        computer: Color,
    ) -> Result<MoveList, ChessError> {
        self.stats.reset();
        let depth = depth.clamped();
        let result = self.score_root(state, depth, computer);
        match &result {
            Ok(moves) => debug!(
                "search depth {depth}: {} root moves, {} nodes, {} evaluations, {} cutoffs, seldepth {}",
                moves.len(),
                self.stats.nodes,
                self.stats.evaluations,
                self.stats.cutoffs,
                self.stats.seldepth
            ),
            Err(e) => warn!("search depth {depth} aborted: {e}"),
        }
        result
    }

    fn score_root(
        &mut self,
        state: &mut GameState,
        depth: SearchDepth,
        computer: Color,
    ) -> Result<MoveList, ChessError> {
        let mut moves = self.generate(state, computer)?;
        let budget = self.root_budget(depth, moves.len());

        for m in moves.as_mut_slice() {
            let score = {
                let mut played = state.play(m);
                self.minimax(&mut played, computer, Node::child_of_root(depth, budget))?
            };
            m.score = score;
            debug!("root move {m}: {score}");
        }
        Ok(moves)
    }

    /// The root moves tied for the best score, with their scores
    pub fn best_move_list(
        &mut self,
        state: &mut GameState,
        depth: SearchDepth,
        computer: Color,
    ) -> Result<MoveList, ChessError> {
        let mut moves = self.scored_root_moves(state, depth, computer)?;
        if let Some(best) = moves.iter().map(Move::score).max() {
            moves.retain(|m| m.score() == best);
        }
        Ok(moves)
    }

    /// One of the best moves, picked uniformly at random among ties.
    ///
    /// `None` when `computer` has no legal move.
    pub fn best_move<R: Rng + ?Sized>(
        &mut self,
        state: &mut GameState,
        depth: SearchDepth,
        computer: Color,
        rng: &mut R,
    ) -> Result<Option<Move>, ChessError> {
        let moves = self.best_move_list(state, depth, computer)?;
        let choice = moves.as_slice().choose(rng).copied();
        if let Some(m) = choice {
            debug!("chose {m} ({}) among {} tied moves", m.score(), moves.len());
        }
        Ok(choice)
    }

    /// Score of one candidate move of `computer`, as the root search would
    /// give it. The state is unchanged afterwards.
    pub fn score_of_move(
        &mut self,
        m: &Move,
        state: &mut GameState,
        depth: SearchDepth,
        computer: Color,
    ) -> Result<i32, ChessError> {
        self.stats.reset();
        let depth = depth.clamped();
        let root_moves = self.generate(state, computer)?.len();
        let budget = self.root_budget(depth, root_moves);
        let mut played = state.play(m);
        let result = self.minimax(&mut played, computer, Node::child_of_root(depth, budget));
        if let Err(e) = &result {
            warn!("scoring {m} aborted: {e}");
        }
        result
    }
}

/// [`Search::best_move`] with the default configuration
pub fn find_best_move<R: Rng + ?Sized>(
    state: &mut GameState,
    depth: SearchDepth,
    computer: Color,
    rng: &mut R,
) -> Result<Option<Move>, ChessError> {
    Search::default().best_move(state, depth, computer, rng)
}

/// [`Search::best_move_list`] with the default configuration
pub fn best_move_list(
    state: &mut GameState,
    depth: SearchDepth,
    computer: Color,
) -> Result<MoveList, ChessError> {
    Search::default().best_move_list(state, depth, computer)
}

/// [`Search::score_of_move`] with the default configuration
pub fn score_of_move(
    m: &Move,
    state: &mut GameState,
    depth: SearchDepth,
    computer: Color,
) -> Result<i32, ChessError> {
    Search::default().score_of_move(m, state, depth, computer)
}
