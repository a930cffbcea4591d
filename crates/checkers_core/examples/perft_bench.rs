//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth]
//!
//! Default depth is 8 from each test position.

use checkers_core::{Board, Side, perft};
use std::env;
use std::time::{Duration, Instant};

/// Midgame with kings on both sides, so long diagonal moves get exercised.
const KINGS_MIDGAME: &str = "
    _o___o__
    ______o_
    _o_X____
    ________
    ___x_O__
    __x_____
    _x___x__
    ________
";

fn main() {
    let depth: u8 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);

    let mut positions = vec![("Starting position", Board::new())];
    match Board::from_diagram(KINGS_MIDGAME, Side::X) {
        Ok(b) => positions.push(("Kings midgame", b)),
        Err(e) => eprintln!("skipping kings midgame: {e}"),
    }

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, board) in &positions {
        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(board, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
