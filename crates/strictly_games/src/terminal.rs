//! Line-based terminal front end.
//!
//! Reads moves as `row col` (or `row,col`) and writes the board after
//! every turn. Input and output are generic so games can be scripted.

use crate::render::{render_board, render_hints, render_status};
use crate::session::{GameSession, PlayerType};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Move, Outcome, analyze};
use tracing::{debug, info, instrument};

/// Parses `row col`, `row,col` or `row, col` into a move.
///
/// Coordinates are not range checked here; the board rejects them.
pub fn parse_move(input: &str) -> Option<Move> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit" | "exit")
}

fn write_position<W: Write>(output: &mut W, board: &Board) -> Result<()> {
    let line = board.winning_line();
    write!(output, "{}", render_board(board, line.as_ref()))?;
    writeln!(output, "{}", render_status(board))?;
    Ok(())
}

/// Runs an interactive game until it ends, the player quits, or input
/// runs out. Returns the outcome of the final board.
#[instrument(skip_all, fields(human = %session.human()))]
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut output: W,
    show_hints: bool,
) -> Result<Outcome> {
    loop {
        write_position(&mut output, session.board())?;

        match session.to_move() {
            None => {
                info!(outcome = %session.outcome(), "Game finished");
                return Ok(session.outcome());
            }
            Some(PlayerType::Engine) => {
                if let Some(mv) = session.play_engine() {
                    writeln!(output, "Engine plays {mv}")?;
                }
                continue;
            }
            Some(PlayerType::Human) => {}
        }

        if show_hints {
            writeln!(output, "{}", render_hints(session.board()))?;
        }
        write!(output, "Your move (row col, q to quit): ")?;
        output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read move")?;
        let line = line.trim();
        if read == 0 || is_quit(line) {
            writeln!(output)?;
            info!("Player left the game");
            return Ok(session.outcome());
        }

        let Some(mv) = parse_move(line) else {
            debug!(input = line, "Unparseable move");
            writeln!(output, "Could not read a move from '{line}', try e.g. '1 1'")?;
            continue;
        };

        if let Err(e) = session.play_human(mv) {
            writeln!(output, "Move rejected: {e}")?;
        }
    }
}

/// Plays the engine against itself from `board`, writing every position.
#[instrument(skip_all, fields(board = %board.to_notation()))]
pub fn self_play<W: Write>(board: Board, mut output: W) -> Result<Outcome> {
    let mut board = board;
    write_position(&mut output, &board)?;

    while let Some(mv) = analyze(&board).best() {
        let mover = board.current_player();
        board = board.apply_move(mv)?;
        writeln!(output, "\n{mover} plays {mv}")?;
        write_position(&mut output, &board)?;
    }

    info!(outcome = %board.outcome(), "Self-play finished");
    Ok(board.outcome())
}

/// Writes the engine's analysis of `board`.
#[instrument(skip_all, fields(board = %board.to_notation()))]
pub fn report_best_move<W: Write>(board: &Board, mut output: W) -> Result<()> {
    write_position(&mut output, board)?;
    let analysis = analyze(board);
    match analysis.best() {
        Some(mv) => writeln!(
            output,
            "Best move for {}: {mv} (value {:+}, {} positions searched)",
            board.current_player(),
            analysis.value(),
            analysis.nodes()
        )?,
        None => writeln!(output, "No move: the game is over")?,
    }
    Ok(())
}
