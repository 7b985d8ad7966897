//! Alpha-beta minimax over one shared, mutable [`GameState`].

use log::trace;

use super::{Search, SearchDepth};
use crate::board::error::ChessError;
use crate::board::{Color, GameState, MoveList};

/// Whose turn a node is, relative to the side the search plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Side {
    Max,
    Min,
}

impl Side {
    #[inline]
    pub(super) const fn flip(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    #[inline]
    pub(super) const fn worst(self) -> i32 {
        match self {
            Side::Max => i32::MIN,
            Side::Min => i32::MAX,
        }
    }
}

/// Window and allowance of one node.
#[derive(Clone, Copy, Debug)]
pub(super) struct Node {
    pub(super) depth: SearchDepth,
    pub(super) side: Side,
    pub(super) alpha: i32,
    pub(super) beta: i32,
    /// Boards this subtree may still evaluate (node-budget mode only)
    pub(super) budget: u64,
    pub(super) ply: u32,
}

impl Node {
    /// A full-window node just below the root
    pub(super) const fn child_of_root(depth: SearchDepth, budget: u64) -> Node {
        Node {
            depth: depth.next(),
            side: Side::Min,
            alpha: i32::MIN,
            beta: i32::MAX,
            budget,
            ply: 1,
        }
    }
}

impl Search {
    /// Legal moves for `color`, counted against the configured move limit
    pub(super) fn generate(
        &mut self,
        state: &mut GameState,
        color: Color,
    ) -> Result<MoveList, ChessError> {
        let moves = state.legal_moves(color)?;
        self.stats.moves_generated += moves.len() as u64;
        match self.config.move_limit {
            Some(limit) if self.stats.moves_generated > limit => {
                Err(ChessError::ResourceExhausted {
                    context: "search move limit reached",
                })
            }
            _ => Ok(moves),
        }
    }

    /// Score of `state` for `computer`, searched below `node`.
    ///
    /// Every move tried is unmade before this returns, on success or error.
    pub(super) fn minimax(
        &mut self,
        state: &mut GameState,
        computer: Color,
        node: Node,
    ) -> Result<i32, ChessError> {
        let to_move = match node.side {
            Side::Max => computer,
            Side::Min => computer.opponent(),
        };
        let best_mode = node.depth.is_best();
        let past_floor = node.ply >= self.config.min_ply;
        let mut budget = node.budget;

        let expand = !node.depth.is_exhausted() && !(best_mode && budget <= 1 && past_floor);
        let moves = if expand {
            self.generate(state, to_move)?
        } else {
            MoveList::new()
        };
        let n = moves.len() as u64;

        if best_mode && n > 0 && budget >= n {
            budget /= n;
        }

        let mut best = node.side.worst();
        if moves.is_empty() || (best_mode && budget <= 1 && past_floor) {
            if expand && !moves.is_empty() {
                trace!("ply {}: budget spent, evaluating", node.ply);
            }
            self.stats.evaluations += 1;
            self.stats.seldepth = self.stats.seldepth.max(node.ply);
            best = state.evaluate_with_horizon(
                computer,
                to_move,
                node.depth.scoring_mode(),
                node.ply,
                self.config.win_bonus_horizon,
            )?;
        } else {
            self.stats.nodes += 1;
            // Fewer boards than moves: try only as many moves as the budget
            // allows, each scored statically. Moves are taken in generation
            // order, so a mate or capture later in the list goes unseen.
            let (limit, child_budget) = if best_mode && budget < n {
                let limit = if past_floor { budget as usize } else { moves.len() };
                (limit, 0)
            } else {
                (moves.len(), budget)
            };

            let mut alpha = node.alpha;
            let mut beta = node.beta;
            for m in moves.iter().take(limit) {
                let child = Node {
                    depth: node.depth.next(),
                    side: node.side.flip(),
                    alpha,
                    beta,
                    budget: child_budget,
                    ply: node.ply + 1,
                };
                let score = {
                    let mut played = state.play(m);
                    self.minimax(&mut played, computer, child)?
                };

                match node.side {
                    Side::Max if score > best => {
                        best = score;
                        alpha = alpha.max(best);
                    }
                    Side::Min if score < best => {
                        best = score;
                        beta = beta.min(best);
                    }
                    _ => {}
                }
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    trace!("ply {}: cutoff after {m}", node.ply);
                    break;
                }
            }
        }

        // A draw scored against this node's mover is handed up as the
        // parent's second-worst outcome.
        let draw = node.depth.scoring_mode().draw_score();
        if (node.side == Side::Max && best == -draw) || (node.side == Side::Min && best == draw) {
            best = -best;
        }
        Ok(best)
    }
}
