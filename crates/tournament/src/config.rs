//! Match configuration, loadable from TOML
//!
//! ```toml
//! num_games = 20
//! depth = 4
//! max_moves = 200
//!
//! [weights]
//! king = 12
//! pawn = 1
//! ```

use std::path::Path;

use anyhow::Context;
use checkers_core::{EvalWeights, SearchLimits};
use serde::{Deserialize, Serialize};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Log every finished game
    pub verbose: bool,
    /// Score root moves on the rayon pool in minimax engines
    pub parallel: bool,
    /// Evaluation weights handed to minimax engines
    pub weights: EvalWeights,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            max_moves: 200,
            alternate_sides: true,
            verbose: true,
            parallel: false,
            weights: EvalWeights::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Create search limits based on this config
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}
