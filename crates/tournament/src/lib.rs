//! Tournament Runner for checkers engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Loading match settings from TOML
//! - Producing text and JSON match reports
//!
//! # Usage
//!
//! ```bash
//! # Minimax against the random baseline
//! cargo run -p tournament -- minimax random --games 20 --depth 4
//!
//! # Settings from a file, JSON report on stdout
//! cargo run -p tournament -- minimax minimax --config match.toml --json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
