pub mod apply;
pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod types;
pub mod validate;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::CheckersError;
pub use eval::{EvalWeights, evaluate, evaluate_with};
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use search::{Minimax, best_move, minimax, pick_best_move};
pub use types::*;

// =============================================================================
// Engine trait - implemented by every move picker (minimax, random, ...)
// =============================================================================

/// Search limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies. Each capture in a chain is one ply.
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation from the moving side's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

/// Trait that all checkers engines implement, so match runners and the
/// interactive player can swap them freely.
pub trait Engine: Send {
    /// Pick a move for the side to move in `board`.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
