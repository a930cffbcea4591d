//! Match results and the JSON match report

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Same game seen from the other player's chair.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The side to move had no legal move
    NoMoves,
    /// An engine returned a move the rules reject; it forfeits
    IllegalMove,
    /// Ply limit reached
    MaxMoves,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game, from engine1's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Whether engine1 played `x` (moving first)
    pub engine1_first: bool,
    pub result: GameResult,
    pub termination: Termination,
    /// Plies played, counting every capture in a chain
    pub plies: u32,
    /// Moves in `g3h4` notation
    pub moves: Vec<String>,
}

/// Everything about a match, ready to print as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}, max {} plies\n\n",
            self.config.num_games, self.config.depth, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<6} {:<6} {:<8} {:<14} {:>6}\n",
            "Game", "Side", "Result", "Termination", "Plies"
        ));
        report.push_str(&"-".repeat(44));
        report.push('\n');
        for (i, game) in self.games.iter().enumerate() {
            let side = if game.engine1_first { "x" } else { "o" };
            let outcome = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            report.push_str(&format!(
                "{:<6} {:<6} {:<8} {:<14} {:>6}\n",
                i + 1,
                side,
                outcome,
                format!("{:?}", game.termination),
                game.plies
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}
