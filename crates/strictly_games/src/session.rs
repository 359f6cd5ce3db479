//! A single human-versus-engine game.
//!
//! The session owns the authoritative board. Each accepted move replaces
//! it with the board returned by the core; rejected moves leave it as is.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Move, MoveError, Outcome, Player, WinningLine, best_move};
use tracing::{debug, info, instrument, warn};

/// Who controls a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Human player at the terminal.
    Human,
    /// The search engine.
    Engine,
}

/// Error returned when the human's move is not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The game has ended.
    #[display("Game is already over")]
    GameOver,

    /// It is the engine's turn.
    #[display("It's not your turn")]
    NotYourTurn,

    /// The board rejected the move.
    #[display("{_0}")]
    #[from]
    InvalidMove(MoveError),
}

/// A game between a human and the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    human: Player,
}

impl GameSession {
    /// Starts a game on an empty board with the human playing `human`.
    #[instrument]
    pub fn new(human: Player) -> Self {
        info!(human = %human, engine = %human.opponent(), "Creating new game session");
        Self {
            board: Board::new(),
            human,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the engine's mark.
    pub fn engine(&self) -> Player {
        self.human.opponent()
    }

    /// Returns who controls `player`.
    pub fn player_type(&self, player: Player) -> PlayerType {
        if player == self.human {
            PlayerType::Human
        } else {
            PlayerType::Engine
        }
    }

    /// Returns who is to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<PlayerType> {
        (!self.board.is_terminal()).then(|| self.player_type(self.board.current_player()))
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    /// Plays a move for the human.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, it is the engine's turn, or the board
    /// rejects the move. The board is unchanged on failure.
    #[instrument(skip(self), fields(board = %self.board.to_notation()))]
    pub fn play_human(&mut self, mv: Move) -> Result<Outcome, SessionError> {
        match self.to_move() {
            None => return Err(SessionError::GameOver),
            Some(PlayerType::Engine) => {
                warn!(%mv, "Human tried to move on the engine's turn");
                return Err(SessionError::NotYourTurn);
            }
            Some(PlayerType::Human) => {}
        }

        self.board = self.board.apply_move(mv)?;
        debug!(%mv, "Human move applied");
        Ok(self.outcome())
    }

    /// Lets the engine move if it is its turn.
    ///
    /// Returns the move played, or `None` if the game is over or the human
    /// is to move.
    #[instrument(skip(self), fields(board = %self.board.to_notation()))]
    pub fn play_engine(&mut self) -> Option<Move> {
        if self.to_move() != Some(PlayerType::Engine) {
            return None;
        }

        let mv = best_move(&self.board)?;
        match self.board.apply_move(mv) {
            Ok(next) => {
                self.board = next;
                info!(%mv, "Engine move applied");
                Some(mv)
            }
            Err(e) => {
                warn!(%mv, error = %e, "Engine produced a rejected move");
                None
            }
        }
    }

    /// Clears the board, keeping the same seats.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.board = Board::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_human_x_moves_first() {
        let session = GameSession::new(Player::X);
        assert_eq!(session.to_move(), Some(PlayerType::Human));
        assert_eq!(session.engine(), Player::O);
    }

    #[test]
    fn test_new_session_human_o_engine_moves_first() {
        let mut session = GameSession::new(Player::O);
        assert_eq!(session.to_move(), Some(PlayerType::Engine));
        assert_eq!(
            session.play_human(Move::new(1, 1)),
            Err(SessionError::NotYourTurn)
        );
        assert_eq!(session.play_engine(), Some(Move::new(0, 0)));
        assert_eq!(session.to_move(), Some(PlayerType::Human));
    }

    #[test]
    fn test_engine_does_not_move_on_human_turn() {
        let mut session = GameSession::new(Player::X);
        assert_eq!(session.play_engine(), None);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_rejected_move_keeps_board() {
        let mut session = GameSession::new(Player::X);
        session.play_human(Move::new(1, 1)).unwrap();
        session.play_engine().unwrap();
        let before = *session.board();

        let err = session.play_human(Move::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidMove(MoveError::SquareOccupied(Move::new(1, 1)))
        );
        let err = session.play_human(Move::new(5, 0)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidMove(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_reset() {
        let mut session = GameSession::new(Player::X);
        session.play_human(Move::new(0, 0)).unwrap();
        session.reset();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.human(), Player::X);
    }
}
