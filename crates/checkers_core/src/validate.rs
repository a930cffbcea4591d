use crate::{board::Board, types::*};

impl Board {
    /// Single-move legality for the side to move, ignoring the mandatory
    /// capture and chain rules (those live in move generation).
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. both squares are on the board and dark
    /// 2. the origin holds a piece of the side to move
    /// 3. the destination is empty
    /// 4. origin and destination share a diagonal
    /// 5. pawns step one square forward, or jump two over exactly one enemy
    /// 6. kings slide any distance, passing at most one occupied square,
    ///    which must hold an enemy
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        if !from.in_bounds() || !to.in_bounds() || !from.is_dark() || !to.is_dark() {
            return false;
        }
        let pc = match self.piece_at(from) {
            Some(pc) if pc.side == self.turn() => pc,
            _ => return false,
        };
        if self.piece_at(to).is_some() {
            return false;
        }
        let dist = match from.diagonal_distance(to) {
            Some(d) => d,
            None => return false,
        };

        match pc.kind {
            PieceKind::Pawn => {
                let drow = to.row as i8 - from.row as i8;
                if drow.signum() != pc.side.forward() {
                    return false;
                }
                match dist {
                    1 => true,
                    2 => from
                        .path_to(to)
                        .first()
                        .and_then(|&mid| self.piece_at(mid))
                        .is_some_and(|mid| mid.side != pc.side),
                    _ => false,
                }
            }
            PieceKind::King => {
                let mut blockers = from.path_to(to).into_iter().filter_map(|s| self.piece_at(s));
                match (blockers.next(), blockers.next()) {
                    (None, _) => true,
                    (Some(first), None) => first.side != pc.side,
                    (Some(_), Some(_)) => false,
                }
            }
        }
    }
}
