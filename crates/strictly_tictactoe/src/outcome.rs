//! Game outcomes and their minimax values.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Minimax value of a position: `+1` X wins, `0` draw, `-1` O wins.
pub type Score = i8;

/// Outcome of a position, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// X has three in a row.
    #[display("X wins")]
    XWins,
    /// O has three in a row.
    #[display("O wins")]
    OWins,
    /// The board is full with no winner.
    #[display("Draw")]
    Draw,
    /// The game is still being played.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_finished(self) -> bool {
        self != Outcome::InProgress
    }

    /// Value from X's point of view, or `None` while the game is running.
    pub fn score(self) -> Option<Score> {
        match self {
            Outcome::XWins => Some(1),
            Outcome::Draw => Some(0),
            Outcome::OWins => Some(-1),
            Outcome::InProgress => None,
        }
    }
}
