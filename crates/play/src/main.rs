//! Interactive terminal checkers.
//!
//! Two humans share the keyboard by default; `--engine` hands one side to a
//! computer player. Moves are typed as two squares, e.g. `3g 4h` or `g3-h4`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use checkers_core::{
    Board, Engine, GameStatus, SearchLimits, Side, legal_moves, move_to_string, parse_move_input,
};
use clap::{Parser, ValueEnum};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    X,
    O,
}

impl From<SideArg> for Side {
    fn from(s: SideArg) -> Self {
        match s {
            SideArg::X => Side::X,
            SideArg::O => Side::O,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "checkers", version)]
struct Args {
    /// Let the computer play one side
    #[arg(long, value_enum)]
    engine: Option<EngineKind>,
    /// Side the computer plays
    #[arg(long, value_enum, default_value = "o")]
    side: SideArg,
    /// Search depth for the minimax engine
    #[arg(long, short = 'd', default_value_t = 4)]
    depth: u8,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut engine: Option<Box<dyn Engine>> = args.engine.map(|kind| match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new()) as Box<dyn Engine>,
        EngineKind::Random => Box::new(RandomEngine::new()),
    });
    let engine_side = Side::from(args.side);
    let limits = SearchLimits::depth(args.depth);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut board = Board::new();

    loop {
        writeln!(stdout, "{board}")?;
        if let GameStatus::Won(winner) = board.status() {
            writeln!(stdout, "{winner} wins!")?;
            return Ok(());
        }
        let turn = board.turn();

        if let Some(engine) = engine.as_mut().filter(|_| turn == engine_side) {
            let result = engine.search(&board, limits);
            let Some(mv) = result.best_move else {
                bail!("{} found no move in a live position", engine.name());
            };
            debug!(%mv, score = result.score, nodes = result.nodes, "engine move");
            writeln!(stdout, "{} plays {}", engine.name(), move_to_string(mv))?;
            board = board
                .make_move(mv)
                .with_context(|| format!("{} produced an illegal move", engine.name()))?;
            continue;
        }

        if let Some(chain) = board.pending_chain() {
            writeln!(stdout, "{turn} must keep jumping from {chain}")?;
        }
        write!(stdout, "It's {turn}'s turn. Your move: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        match line.trim() {
            "quit" | "exit" => return Ok(()),
            "moves" => {
                let all: Vec<String> = legal_moves(&board).into_iter().map(move_to_string).collect();
                writeln!(stdout, "Legal moves: {}", all.join(" "))?;
                continue;
            }
            _ => {}
        }

        match parse_move_input(&line).and_then(|mv| board.make_move(mv)) {
            Ok(next) => board = next,
            Err(e) if e.is_recoverable() => {
                warn!(input = line.trim(), error = %e, "move rejected");
                writeln!(stdout, "Invalid move, try again ({e})")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
