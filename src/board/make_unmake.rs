use std::ops::{Deref, DerefMut};

use super::state::Cell;
use super::{Board, CastlingRights, GameState, Move, Piece, Special, Square};

/// Column the king starts on
pub(crate) const KING_COL: usize = 4;

/// Board contents needed to take a move back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Snapshot {
    Squares { from: Cell, to: Cell },
    /// Castling touches four squares of one row; keep the whole row
    HomeRow { row: usize, cells: [Cell; 8] },
}

/// Everything `unmake_move` needs to restore the pre-move state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) snapshot: Snapshot,
    pub(crate) previous_rights: CastlingRights,
}

impl Board {
    /// Play `m` on the board.
    ///
    /// The origin piece moves to the destination. Castling moves are given
    /// as the rook's squares, so the king is then carried from column 4 to
    /// the square just beyond the rook's destination. Promotions replace the
    /// pawn with the tagged piece. Returns the piece that left the origin.
    pub fn apply_move(&mut self, m: &Move) -> Cell {
        let moved = self.clear(m.from);
        self.set_cell(m.to, moved);

        match m.special {
            Special::Normal => {}
            Special::Castle => {
                let row = m.from.row();
                let king_to = if m.to.col() > KING_COL {
                    (m.to.col() + 1).min(7)
                } else {
                    m.to.col().saturating_sub(1)
                };
                let king = self.clear(Square(KING_COL, row));
                self.set_cell(Square(king_to, row), king);
            }
            Special::Promote(piece) => {
                if let Some((color, _)) = moved {
                    self.set_piece(m.to, color, piece);
                }
            }
        }
        moved
    }

    pub(crate) fn snapshot_for(&self, m: &Move) -> Snapshot {
        if m.is_castling() {
            let row = m.from.row();
            Snapshot::HomeRow {
                row,
                cells: self.row(row),
            }
        } else {
            Snapshot::Squares {
                from: self.piece_at(m.from),
                to: self.piece_at(m.to),
            }
        }
    }

    pub(crate) fn restore(&mut self, m: &Move, snapshot: &Snapshot) {
        match snapshot {
            Snapshot::Squares { from, to } => {
                self.set_cell(m.from, *from);
                self.set_cell(m.to, *to);
            }
            Snapshot::HomeRow { row, cells } => self.restore_row(*row, cells),
        }
    }
}

impl GameState {
    /// Commit a move: update the board and the castling rights.
    pub fn apply_move(&mut self, m: &Move) {
        let moved = self.board.apply_move(m);
        if let Some((color, piece)) = moved {
            self.rights.update(color, piece, m.from);
            if m.is_castling() {
                self.rights
                    .update(color, Piece::King, Square(KING_COL, m.from.row()));
            }
        }
    }

    /// Apply `m` and return what is needed to take it back.
    pub fn make_move(&mut self, m: &Move) -> UnmakeInfo {
        let info = UnmakeInfo {
            snapshot: self.board.snapshot_for(m),
            previous_rights: self.rights,
        };
        self.apply_move(m);
        info
    }

    /// Exact inverse of the `make_move` call that produced `info`.
    pub fn unmake_move(&mut self, m: &Move, info: UnmakeInfo) {
        self.board.restore(m, &info.snapshot);
        self.rights = info.previous_rights;
    }

    /// Apply `m` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the state; dropping it unmakes the move, on every
    /// exit path including `?` returns.
    pub fn play(&mut self, m: &Move) -> MoveGuard<'_> {
        let info = self.make_move(m);
        MoveGuard {
            state: self,
            mv: *m,
            info,
        }
    }
}

/// Scoped make/unmake of one move.
pub struct MoveGuard<'a> {
    state: &'a mut GameState,
    mv: Move,
    info: UnmakeInfo,
}

impl Deref for MoveGuard<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.state.unmake_move(&self.mv, self.info);
    }
}
