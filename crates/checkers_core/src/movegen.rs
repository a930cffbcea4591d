use crate::{board::Board, types::*};

/// Diagonal directions in enumeration order: up-left, up-right, down-left, down-right.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The opponent of the side to move has no legal moves left.
    Won(Side),
}

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector. Order is a row-major piece scan followed by each piece's
/// destination order, which makes search results reproducible.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();

    if let Some(chain) = board.pending_chain() {
        let jumps = board.available_jumps(chain);
        let dests = if jumps.is_empty() {
            board.reachable_squares(chain)
        } else {
            jumps
        };
        out.extend(dests.into_iter().map(|to| Move::new(chain, to)));
        return;
    }

    let mut quiet = Vec::new();
    for (from, _) in board.pieces(board.turn()) {
        for to in board.reachable_squares(from) {
            if board.is_jump(from, to) {
                out.push(Move::new(from, to));
            } else if out.is_empty() {
                quiet.push(Move::new(from, to));
            }
        }
    }
    // Capture is mandatory whenever any piece can take.
    if out.is_empty() {
        *out = quiet;
    }
}

impl Board {
    /// Destinations the piece on `from` may legally move to, ignoring the
    /// mandatory capture rule. Pawns look at the two forward neighbours and
    /// the two forward jump targets; kings look along all four diagonals.
    pub fn reachable_squares(&self, from: Square) -> Vec<Square> {
        let pc = match self.piece_at(from) {
            Some(pc) => pc,
            None => return Vec::new(),
        };
        let mut out = Vec::new();
        match pc.kind {
            PieceKind::Pawn => {
                let dr = pc.side.forward();
                for dist in 1..=2i8 {
                    for dc in [-1, 1] {
                        if let Some(to) = from.offset(dr * dist, dc * dist) {
                            out.push(to);
                        }
                    }
                }
            }
            PieceKind::King => {
                for (dr, dc) in DIAGONALS {
                    let mut dist = 1i8;
                    while let Some(to) = from.offset(dr * dist, dc * dist) {
                        out.push(to);
                        dist += 1;
                    }
                }
            }
        }
        out.retain(|&to| self.is_valid_move(from, to));
        out
    }

    /// Whether moving `from` to `to` captures: a pawn moving more than one
    /// row, or a king passing over an enemy piece.
    pub fn is_jump(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some(pc) if pc.is_king() => self.captured_square(from, to).is_some(),
            Some(_) => from.row.abs_diff(to.row) > 1,
            None => false,
        }
    }

    /// The enemy square a jump from `from` to `to` removes, if any.
    pub fn captured_square(&self, from: Square, to: Square) -> Option<Square> {
        let mover = self.piece_at(from)?;
        from.path_to(to)
            .into_iter()
            .find(|&s| self.piece_at(s).is_some_and(|pc| pc.side != mover.side))
    }

    pub fn available_jumps(&self, from: Square) -> Vec<Square> {
        let mut out = self.reachable_squares(from);
        out.retain(|&to| self.is_jump(from, to));
        out
    }

    /// Same as [`legal_moves`]; kept as a method for call sites holding a board.
    pub fn available_moves_for_side(&self) -> Vec<Move> {
        legal_moves(self)
    }

    pub fn has_any_jump(&self) -> bool {
        self.pieces(self.turn())
            .any(|(from, _)| !self.available_jumps(from).is_empty())
    }

    /// The side to move loses once it has no legal move.
    pub fn status(&self) -> GameStatus {
        if legal_moves(self).is_empty() {
            GameStatus::Won(self.turn().other())
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
