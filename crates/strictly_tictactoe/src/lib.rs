//! Pure tic-tac-toe game logic with an unbeatable opponent.
//!
//! # Architecture
//!
//! - **Board**: a `Copy` value holding nine squares. Turn order, legal
//!   moves, the winning line and the outcome are derived from the squares.
//! - **Rules**: pure functions for win and draw detection.
//! - **Search**: alpha-beta minimax returning the optimal move.
//!
//! Nothing here performs I/O or keeps state between calls, so a front end
//! owns the current board and passes it in.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Move, Outcome, best_move};
//!
//! let board = Board::new().apply_move(Move::new(1, 1))?;
//! let reply = best_move(&board).expect("game is not over");
//! let board = board.apply_move(reply)?;
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod notation;
mod outcome;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use notation::BoardParseError;
pub use outcome::{Outcome, Score};
pub use rules::{WinningLine, winning_line};
pub use search::{Analysis, analyze, best_move};
pub use types::{BOARD_SIZE, Board, Player, SQUARE_COUNT, Square};

/// Alias for clarity when talking about the symbol on a square.
pub type Mark = Player;
