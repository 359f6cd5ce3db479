//! Tests for human-versus-engine game sessions.

use strictly_games::{GameSession, PlayerType, SessionError};
use strictly_tictactoe::{Move, MoveError, Outcome, Player};

/// Plays the game out, the human taking the first free square from
/// `preferences` on each turn.
fn play_out(session: &mut GameSession, preferences: &[Move]) {
    while session.to_move().is_some() {
        if session.play_engine().is_some() {
            continue;
        }
        let legal = session.board().legal_moves();
        let mv = preferences
            .iter()
            .copied()
            .find(|mv| legal.contains(mv))
            .unwrap_or(legal[0]);
        session.play_human(mv).expect("human move accepted");
    }
}

#[test]
fn test_engine_holds_center_opening() {
    let mut session = GameSession::new(Player::X);
    play_out(
        &mut session,
        &[
            Move::new(1, 1),
            Move::new(2, 2),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(2, 1),
        ],
    );
    assert!(matches!(session.outcome(), Outcome::Draw | Outcome::OWins));
}

#[test]
fn test_engine_punishes_blunder() {
    // Engine is X and opens (0,0); an edge reply loses.
    let mut session = GameSession::new(Player::O);
    assert_eq!(session.play_engine(), Some(Move::new(0, 0)));
    session.play_human(Move::new(0, 1)).unwrap();

    // Keep answering with the first free square.
    while session.to_move().is_some() {
        if session.play_engine().is_none() {
            let mv = session.board().legal_moves()[0];
            session.play_human(mv).unwrap();
        }
    }

    assert_eq!(session.outcome(), Outcome::XWins);
    let line = session.winning_line().expect("engine completed a line");
    assert_eq!(line.player(), Player::X);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut session = GameSession::new(Player::O);
    while session.to_move().is_some() {
        if session.play_engine().is_none() {
            let mv = session.board().legal_moves()[0];
            session.play_human(mv).unwrap();
        }
    }

    assert_eq!(session.to_move(), None);
    assert_eq!(session.play_engine(), None);
    assert_eq!(
        session.play_human(Move::new(0, 0)),
        Err(SessionError::GameOver)
    );
}

#[test]
fn test_player_types() {
    let session = GameSession::new(Player::O);
    assert_eq!(session.player_type(Player::O), PlayerType::Human);
    assert_eq!(session.player_type(Player::X), PlayerType::Engine);
}

#[test]
fn test_invalid_move_error_converts() {
    let err: SessionError = MoveError::GameOver.into();
    assert_eq!(err, SessionError::InvalidMove(MoveError::GameOver));
    assert_eq!(err.to_string(), "Game is already over");
}
