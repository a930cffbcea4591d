//! Tournament CLI
//!
//! Run matches between engines and report the outcome.

use std::path::PathBuf;

use anyhow::{Context, bail};
use checkers_core::Engine;
use clap::Parser;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play a match between two checkers engines.
///
/// Engines: `minimax`, `random` or `random:<seed>`.
#[derive(Debug, Parser)]
#[command(name = "tournament", version)]
struct Args {
    /// Engine playing the first game as x
    engine1: String,
    /// Opponent engine
    engine2: String,
    /// TOML file with match settings; flags below override it
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
    #[arg(long, short = 'g')]
    games: Option<u32>,
    #[arg(long, short = 'd')]
    depth: Option<u8>,
    /// Plies per game before the game is drawn
    #[arg(long)]
    max_moves: Option<u32>,
    /// Score root moves in parallel in minimax engines
    #[arg(long)]
    parallel: bool,
    /// Print the full report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn create_engine(name: &str, config: &MatchConfig) -> anyhow::Result<Box<dyn Engine>> {
    let (kind, arg) = match name.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (name, None),
    };
    match kind.to_lowercase().as_str() {
        "minimax" | "mm" => Ok(Box::new(
            MinimaxEngine::with_weights(config.weights).parallel(config.parallel),
        )),
        "random" => match arg {
            Some(seed) => {
                let seed = seed
                    .parse()
                    .with_context(|| format!("invalid random seed {seed:?}"))?;
                Ok(Box::new(RandomEngine::seeded(seed)))
            }
            None => Ok(Box::new(RandomEngine::new())),
        },
        _ => bail!("unknown engine: {name}"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.num_games = games;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(max_moves) = args.max_moves {
        config.max_moves = max_moves;
    }
    config.parallel |= args.parallel;

    let mut engine1 = create_engine(&args.engine1, &config)?;
    let mut engine2 = create_engine(&args.engine2, &config)?;

    info!(
        engine1 = %args.engine1,
        engine2 = %args.engine2,
        games = config.num_games,
        depth = config.depth,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut());

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.generate_report());
    }
    Ok(())
}
