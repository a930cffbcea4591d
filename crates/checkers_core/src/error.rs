use thiserror::Error;

use crate::types::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// Malformed or out-of-range coordinate text.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// The move is not in the current legal-move set. The board is unchanged.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },
    /// Board bookkeeping broke an invariant. Not recoverable by re-prompting.
    #[error("invalid turn state: {0}")]
    InvalidTurnState(String),
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}

impl CheckersError {
    /// Errors a player can recover from by entering another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CheckersError::InvalidCoordinate(_) | CheckersError::IllegalMove { .. }
        )
    }
}
