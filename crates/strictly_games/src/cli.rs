//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Player;

/// Strictly Games - tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against an unbeatable engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_games.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Tracing filter, overriding the config file (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Mark to play as (x or o); the engine takes the other
        #[arg(long)]
        human: Option<Player>,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Board in row-major notation, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: String,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Starting position (defaults to the empty board)
        #[arg(short, long)]
        board: Option<String>,
    },
}
