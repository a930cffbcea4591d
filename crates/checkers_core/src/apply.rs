use tracing::{debug, warn};

use crate::{board::Board, error::CheckersError, movegen::legal_moves, types::*};

impl Board {
    /// Apply `mv` for the side to move and return the resulting board.
    ///
    /// The move must be in the current legal-move set; otherwise
    /// `CheckersError::IllegalMove` is returned and nothing changes. After a
    /// capture, if the moved piece can capture again the same side keeps the
    /// move with a chain pending on the landing square; in every other case
    /// the turn passes.
    pub fn make_move(&self, mv: Move) -> Result<Board, CheckersError> {
        if !legal_moves(self).contains(&mv) {
            warn!(%mv, turn = %self.turn(), "rejected illegal move");
            return Err(CheckersError::IllegalMove { mv });
        }
        Ok(self.apply_unchecked(mv))
    }

    /// Apply a move already known to be legal, such as one taken straight
    /// from [`legal_moves`].
    pub(crate) fn apply_unchecked(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let Some(mut pc) = next.piece_at(mv.from) else {
            return next;
        };

        let captured = if self.is_jump(mv.from, mv.to) {
            self.captured_square(mv.from, mv.to)
        } else {
            None
        };

        next.set_piece(mv.from, None);
        if let Some(cap) = captured {
            next.set_piece(cap, None);
        }
        if pc.kind == PieceKind::Pawn && mv.to.row == pc.side.promotion_row() {
            pc.kind = PieceKind::King;
        }
        next.set_piece(mv.to, Some(pc));

        if captured.is_some() {
            next.set_pending_chain(Some(mv.to));
            if !next.available_jumps(mv.to).is_empty() {
                debug!(%mv, "capture chain continues");
                return next;
            }
        }
        next.flip_turn();
        next
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
