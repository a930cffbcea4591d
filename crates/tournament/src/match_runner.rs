//! Match runner for playing games between engines

use checkers_core::{Board, Engine, Side, move_to_string};
use tracing::{info, warn};

use crate::config::MatchConfig;
use crate::results::{GameRecord, GameResult, MatchReport, MatchResult, Termination};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the report from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate sides if configured
            let engine1_first = !self.config.alternate_sides || game_num % 2 == 0;

            let mut record = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            record.engine1_first = engine1_first;
            if !engine1_first {
                // Flip result since engine1 moved second
                record.result = record.result.flipped();
            }
            result.record(record.result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    side = if engine1_first { "x" } else { "o" },
                    result = ?record.result,
                    termination = ?record.termination,
                    plies = record.plies,
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }
            games.push(record);
        }

        MatchReport {
            engine1: engine1.name().to_string(),
            engine2: engine2.name().to_string(),
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game, returns the record from `first`'s perspective
    fn play_game<'a>(
        &self,
        first: &'a mut dyn Engine,
        second: &'a mut dyn Engine,
    ) -> GameRecord {
        let mut board = Board::new();
        let mut moves = Vec::new();
        first.new_game();
        second.new_game();

        let finish = |result, termination, moves: Vec<String>| GameRecord {
            engine1_first: true,
            result,
            termination,
            plies: moves.len() as u32,
            moves,
        };
        // `first` always plays x
        let loss_for = |side: Side| match side {
            Side::X => GameResult::Loss,
            Side::O => GameResult::Win,
        };

        for _ply in 0..self.config.max_moves {
            let mover = board.turn();
            let engine = match mover {
                Side::X => &mut *first,
                Side::O => &mut *second,
            };
            let search = engine.search(&board, self.config.search_limits());

            let Some(mv) = search.best_move else {
                // No legal moves: the side to move loses
                return finish(loss_for(mover), Termination::NoMoves, moves);
            };
            match board.make_move(mv) {
                Ok(next) => {
                    moves.push(move_to_string(mv));
                    board = next;
                }
                Err(e) => {
                    warn!(engine = engine.name(), error = %e, "engine forfeits");
                    return finish(loss_for(mover), Termination::IllegalMove, moves);
                }
            }
        }

        if board.is_game_over() {
            return finish(loss_for(board.turn()), Termination::NoMoves, moves);
        }
        finish(GameResult::Draw, Termination::MaxMoves, moves)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2).result
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
