//! Strictly Games - Unified CLI
//!
//! Terminal tic-tac-toe with an unbeatable engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_games::{GameConfig, GameSession, play, report_best_move, self_play};
use strictly_tictactoe::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(filter) = cli.log {
        config = config.with_log_filter(filter);
    }

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { human } => {
            let config = match human {
                Some(human) => config.with_human(human),
                None => config,
            };
            run_play(&config)
        }
        Command::BestMove { board } => run_best_move(&board),
        Command::SelfPlay { board } => run_self_play(board.as_deref()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!(human = %config.human(), "Starting interactive game");
    let mut session = GameSession::new(config.human());
    let outcome = play(
        &mut session,
        io::stdin().lock(),
        io::stdout().lock(),
        config.show_hints(),
    )?;
    info!(%outcome, "Interactive game ended");
    Ok(())
}

/// Print the engine's analysis of a position
#[instrument]
fn run_best_move(board: &str) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{board}'"))?;
    report_best_move(&board, io::stdout().lock())
}

/// Run engine-versus-engine from a position
#[instrument]
fn run_self_play(board: Option<&str>) -> Result<()> {
    let board: Board = match board {
        Some(text) => text
            .parse()
            .with_context(|| format!("Invalid board '{text}'"))?,
        None => Board::new(),
    };
    let outcome = self_play(board, io::stdout().lock())?;
    info!(%outcome, "Self-play ended");
    Ok(())
}
