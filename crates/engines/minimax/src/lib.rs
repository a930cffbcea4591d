//! Minimax Checkers Engine
//!
//! Plain depth-limited minimax over the rules in `checkers_core`, scored by
//! the material/advancement evaluation. This is the baseline engine other
//! move pickers are compared against.

use checkers_core::{
    Board, Engine, EvalWeights, Minimax, Move, SearchLimits, SearchResult, legal_moves,
};
use rayon::prelude::*;
use tracing::debug;

/// Checkers engine running plain minimax (no pruning).
///
/// With `parallel` set, root moves are scored on the rayon thread pool. Each
/// root move searches its own cloned subtree, so the chosen move and score
/// are identical to the sequential search.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    weights: EvalWeights,
    parallel: bool,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: EvalWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Score every root move in parallel and keep the first best one.
    fn pick_parallel(&mut self, board: &Board, depth: u8) -> Option<(Move, i32)> {
        let weights = self.weights;
        let scored: Vec<(Move, i32, u64)> = legal_moves(board)
            .into_par_iter()
            .map(|mv| {
                let mut search = Minimax::new(weights);
                let score = search.score_move(board, mv, depth);
                (mv, score, search.nodes)
            })
            .collect();

        let mut best: Option<(Move, i32)> = None;
        for (mv, score, nodes) in scored {
            self.nodes += nodes;
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let best = if self.parallel {
            self.pick_parallel(board, limits.depth)
        } else {
            let mut search = Minimax::new(self.weights);
            let best = search.pick_best_move(board, limits.depth);
            self.nodes = search.nodes;
            best
        };
        debug!(
            engine = self.name(),
            depth = limits.depth,
            nodes = self.nodes,
            "search finished"
        );

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        if self.parallel {
            "Minimax v1.0 (parallel)"
        } else {
            "Minimax v1.0"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
