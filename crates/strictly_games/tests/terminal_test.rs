//! Scripted games through the terminal front end.

use std::io::Cursor;
use strictly_games::{GameSession, play, report_best_move, self_play};
use strictly_tictactoe::{Board, Outcome, Player};

fn run(human: Player, script: &str) -> (Outcome, String) {
    let mut session = GameSession::new(human);
    let mut output = Vec::new();
    let outcome = play(&mut session, Cursor::new(script), &mut output, true).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_invalid_input_is_reported_and_ignored() {
    let (outcome, text) = run(Player::X, "1 1\n1 1\n9 9\nhello\nq\n");
    assert_eq!(outcome, Outcome::InProgress);
    assert!(text.contains("Engine plays (0, 0)"));
    assert!(text.contains("Move rejected: Square (1, 1) is already occupied"));
    assert!(text.contains("Move rejected: Move (9, 9) is off the board"));
    assert!(text.contains("Could not read a move from 'hello'"));
    assert!(text.contains("free: "));
}

#[test]
fn test_end_of_input_leaves_game() {
    let (outcome, text) = run(Player::X, "");
    assert_eq!(outcome, Outcome::InProgress);
    assert!(text.contains("X to move"));
}

#[test]
fn test_engine_wins_against_first_free_square() {
    // Every square in row-major order; occupied ones are rejected, so the
    // human always ends up in the first free square.
    let script = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
    let (outcome, text) = run(Player::O, script);
    assert_eq!(outcome, Outcome::XWins);
    assert!(text.contains("X wins on"));
    assert!(text.contains("[X]"));
}

#[test]
fn test_self_play_output() {
    let mut output = Vec::new();
    let outcome = self_play(Board::new(), &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert!(text.contains("X plays (0, 0)"));
    assert!(text.trim_end().ends_with("Draw"));
}

#[test]
fn test_report_best_move() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut output = Vec::new();
    report_best_move(&board, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Best move for X: (0, 2) (value +1"));
}

#[test]
fn test_report_on_finished_board() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let mut output = Vec::new();
    report_best_move(&board, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("No move: the game is over"));
}
