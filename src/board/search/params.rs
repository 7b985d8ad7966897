use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_MIN_PLY, DEFAULT_NODE_BUDGET, MAX_FIXED_DEPTH, MIN_FIXED_DEPTH};
use crate::board::eval::{ScoringMode, DEFAULT_WIN_BONUS_HORIZON};

/// Tunables of the minimax search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Boards the node-budget mode may evaluate
    pub node_budget: u64,
    /// Plies expanded in node-budget mode before the budget can stop a branch
    pub min_ply: u32,
    /// Abort with `ResourceExhausted` once this many moves were generated
    pub move_limit: Option<u64>,
    /// Plies within which a scaled mate earns a proximity bonus
    pub win_bonus_horizon: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            node_budget: DEFAULT_NODE_BUDGET,
            min_ply: DEFAULT_MIN_PLY,
            move_limit: None,
            win_bonus_horizon: DEFAULT_WIN_BONUS_HORIZON,
        }
    }
}

/// How far the search looks ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchDepth {
    /// A fixed number of plies. `Fixed(0)` searches like `Fixed(1)`.
    Fixed(u8),
    /// Search until the node budget runs out
    Best,
}

impl SearchDepth {
    /// A fixed depth in the range a collaborator may ask for (1 to 4)
    #[must_use]
    pub fn fixed(depth: u8) -> Option<Self> {
        let depth = SearchDepth::Fixed(depth);
        depth.is_valid().then_some(depth)
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            SearchDepth::Fixed(d) => d >= MIN_FIXED_DEPTH && d <= MAX_FIXED_DEPTH,
            SearchDepth::Best => true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_best(self) -> bool {
        matches!(self, SearchDepth::Best)
    }

    /// Evaluation weights used at this depth setting
    #[must_use]
    pub const fn scoring_mode(self) -> ScoringMode {
        match self {
            SearchDepth::Fixed(_) => ScoringMode::Material,
            SearchDepth::Best => ScoringMode::Scaled,
        }
    }

    /// Depth handed to the children of a node
    #[inline]
    pub(crate) const fn next(self) -> Self {
        match self {
            SearchDepth::Fixed(d) => SearchDepth::Fixed(d.saturating_sub(1)),
            SearchDepth::Best => SearchDepth::Best,
        }
    }

    /// Fixed depths beyond the supported range are cut to the deepest one
    #[inline]
    pub(crate) const fn clamped(self) -> Self {
        match self {
            SearchDepth::Fixed(d) if d > MAX_FIXED_DEPTH => SearchDepth::Fixed(MAX_FIXED_DEPTH),
            other => other,
        }
    }

    #[inline]
    pub(crate) const fn is_exhausted(self) -> bool {
        matches!(self, SearchDepth::Fixed(0))
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        SearchDepth::Fixed(1)
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchDepth::Fixed(d) => write!(f, "{d}"),
            SearchDepth::Best => write!(f, "best"),
        }
    }
}

/// Counters collected by one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Interior nodes whose children were searched
    pub nodes: u64,
    /// Boards scored by the evaluation function
    pub evaluations: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Moves produced by move generation
    pub moves_generated: u64,
    /// Deepest ply evaluated
    pub seldepth: u32,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}
