//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::outcome::Outcome;
use super::rules::{self, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::apply_move`] returns a new board and leaves
/// the receiver untouched. Whose turn it is, the legal moves and the outcome
/// are all derived from the squares, nothing else is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARE_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
        }
    }

    /// Builds a board from squares without checking the piece counts.
    pub(crate) fn from_squares_unchecked(squares: [Square; SQUARE_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given coordinates.
    ///
    /// Returns `None` if either coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        Move::new(row, col).index().map(|index| self.squares[index])
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SQUARE_COUNT] {
        &self.squares
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| s.player() == Some(player))
            .count()
    }

    /// Returns the player to move.
    ///
    /// X moves first, so X is on move whenever an even number of squares
    /// are filled.
    pub fn current_player(&self) -> Player {
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns every empty square in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .filter_map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// Places the current player's mark, returning the resulting board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if a coordinate is not in `0..3`.
    /// - [`MoveError::SquareOccupied`] if the target square holds a mark.
    /// - [`MoveError::GameOver`] if the board already has a winning line.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let index = mv.index().ok_or_else(|| {
            warn!(row = mv.row, col = mv.col, "Rejected move off the board");
            MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            }
        })?;

        if !self.squares[index].is_empty() {
            warn!(%mv, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(mv));
        }

        if rules::check_winner(self).is_some() {
            warn!(%mv, "Rejected move after the game was won");
            return Err(MoveError::GameOver);
        }

        let mut next = *self;
        next.squares[index] = Square::Occupied(self.current_player());
        Ok(next)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game is over, by a win or a full board.
    pub fn is_terminal(&self) -> bool {
        rules::check_winner(self).is_some() || self.is_full()
    }

    /// Returns the first completed line, if any.
    ///
    /// Front ends use the coordinates to highlight the winning squares.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self)
    }

    /// Returns the outcome of the position.
    pub fn outcome(&self) -> Outcome {
        match rules::check_winner(self) {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
