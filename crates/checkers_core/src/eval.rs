use serde::{Deserialize, Serialize};

use crate::{board::Board, types::*};

/// Term weights for [`evaluate_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Flat value of a king.
    pub king: i32,
    /// Multiplier on a pawn's advancement (1 on its home rank, growing by one
    /// per rank toward promotion).
    pub pawn: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self { king: 10, pawn: 1 }
    }
}

/// Static score of `board` from `perspective`'s point of view using the
/// default weights.
pub fn evaluate(board: &Board, perspective: Side) -> i32 {
    evaluate_with(board, perspective, &EvalWeights::default())
}

pub fn evaluate_with(board: &Board, perspective: Side, weights: &EvalWeights) -> i32 {
    let mut score = 0i32;
    for (s, pc) in board.occupied() {
        let v = match pc.kind {
            PieceKind::King => weights.king,
            PieceKind::Pawn => weights.pawn * advancement(pc.side, s),
        };
        score += if pc.side == perspective { v } else { -v };
    }
    score
}

/// 1 on the side's home rank up to `BOARD_SIZE` on its promotion rank.
fn advancement(side: Side, s: Square) -> i32 {
    let home_distance = s.row.abs_diff(side.promotion_row()) as i32;
    BOARD_SIZE as i32 - home_distance
}
