//! Plain depth-limited minimax.
//!
//! Every child position is a fresh clone produced by move application, so
//! sibling branches never share a grid and root moves can be scored
//! independently (see `minimax_engine` for the parallel root).

use tracing::debug;

use crate::{
    board::Board,
    eval::{EvalWeights, evaluate_with},
    movegen::legal_moves,
    types::{Move, Side},
};

/// Minimax searcher carrying its evaluation weights and a node counter.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    pub weights: EvalWeights,
    /// Positions visited since construction or the last [`Minimax::reset`].
    pub nodes: u64,
}

impl Minimax {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights, nodes: 0 }
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Minimax value of `board` for `perspective`.
    ///
    /// A node maximizes when `perspective` is to move and minimizes otherwise,
    /// so a capture chain (same side moving again) keeps its role. Depth
    /// exhaustion and positions without legal moves return the static
    /// evaluation.
    pub fn value(&mut self, board: &Board, depth: u8, perspective: Side) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate_with(board, perspective, &self.weights);
        }
        let moves = legal_moves(board);
        if moves.is_empty() {
            return evaluate_with(board, perspective, &self.weights);
        }

        let maximizing = board.turn() == perspective;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let child = board.apply_unchecked(mv);
            let score = self.value(&child, depth - 1, perspective);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Score of playing `mv` at the root of a `depth`-ply search, from the
    /// mover's perspective. `mv` must come from [`legal_moves`] on `board`.
    pub fn score_move(&mut self, board: &Board, mv: Move, depth: u8) -> i32 {
        let child = board.apply_unchecked(mv);
        self.value(&child, depth.saturating_sub(1), board.turn())
    }

    /// Best root move and its score. Ties keep the first move in generation
    /// order. `None` when the side to move has no legal moves.
    pub fn pick_best_move(&mut self, board: &Board, depth: u8) -> Option<(Move, i32)> {
        let moves = legal_moves(board);
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let score = self.score_move(board, mv, depth);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        if let Some((mv, score)) = best {
            debug!(%mv, score, depth, nodes = self.nodes, "root search complete");
        }
        best
    }
}

/// Minimax value of `board` with default weights. The perspective is the
/// side to move when `maximizing`, its opponent otherwise.
pub fn minimax(board: &Board, depth: u8, maximizing: bool) -> i32 {
    let perspective = if maximizing {
        board.turn()
    } else {
        board.turn().other()
    };
    Minimax::default().value(board, depth, perspective)
}

pub fn pick_best_move(board: &Board, depth: u8) -> Option<(Move, i32)> {
    Minimax::default().pick_best_move(board, depth)
}

/// Best move for the side to move at `depth` plies, for the caller to apply
/// with [`Board::make_move`].
pub fn best_move(board: &Board, depth: u8) -> Option<Move> {
    pick_best_move(board, depth).map(|(mv, _)| mv)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
