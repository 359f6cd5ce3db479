//! Move coordinates and move errors for tic-tac-toe.
//!
//! A [`Move`] is only a pair of coordinates. It says nothing about who
//! plays it: the mark placed is always the board's current player.

use super::types::{BOARD_SIZE, SQUARE_COUNT};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A (row, column) coordinate naming the square to occupy.
///
/// Any coordinates can be represented. Only those inside the board and on
/// an empty square are accepted by [`Board::apply_move`](super::Board::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major board index, or `None` if the move is off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < BOARD_SIZE && self.col < BOARD_SIZE).then(|| self.row * BOARD_SIZE + self.col)
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARE_COUNT).then(|| Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when a move cannot be applied.
///
/// The board is never modified when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// A coordinate lies outside the board.
    #[display("Move ({row}, {col}) is off the board (coordinates must be 0-2)")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the move's coordinates is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Move),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}
