//! Text notation for boards.
//!
//! A board is written as nine cells in row-major order: `X`, `O`, or one
//! of `.`, `-`, `_` for an empty square. Slashes and whitespace may be used
//! to separate rows and are ignored, so `"XX./OO./..."` and `"XX.OO...."`
//! describe the same position.

use super::rules;
use super::types::{Board, Player, SQUARE_COUNT, Square};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Error produced when a board cannot be built from text or squares.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, got {got} in '{context}'")]
    WrongLength {
        /// Number of cells found.
        got: usize,
        /// The text being parsed.
        context: String,
    },

    /// A cell character was not recognised.
    #[display("Invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index (0-8) of the character.
        position: usize,
        /// The text being parsed.
        context: String,
    },

    /// X and O counts cannot arise from alternating play.
    #[display("Invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },

    /// Both players hold a line, or a player moved after the game was won.
    #[display("Position is unreachable: play continued after {winner} won")]
    PlayAfterWin {
        /// The player holding a line.
        winner: Player,
    },
}

impl Board {
    /// Builds a board from row-major squares, checking that the position
    /// can arise from legal play.
    #[instrument(skip(squares))]
    pub fn from_squares(squares: [Square; SQUARE_COUNT]) -> Result<Self, BoardParseError> {
        let board = Self::from_squares_unchecked(squares);
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardParseError::InvalidPieceCounts { x_count, o_count });
        }

        let x_won = rules::has_line(&board, Player::X);
        let o_won = rules::has_line(&board, Player::O);
        // The winner must have made the last move.
        if x_won && (o_won || x_count == o_count) {
            return Err(BoardParseError::PlayAfterWin { winner: Player::X });
        }
        if o_won && x_count != o_count {
            return Err(BoardParseError::PlayAfterWin { winner: Player::O });
        }

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();

        if cells.len() != SQUARE_COUNT {
            return Err(BoardParseError::WrongLength {
                got: cells.len(),
                context: s.to_string(),
            });
        }

        let mut squares = [Square::Empty; SQUARE_COUNT];
        for (position, (square, &character)) in squares.iter_mut().zip(&cells).enumerate() {
            *square = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    });
                }
            };
        }

        let board = Self::from_squares(squares)?;
        debug!(board = %board.to_notation(), "Parsed board");
        Ok(board)
    }
}

impl Board {
    /// Writes the board in compact notation, e.g. `"XX./OO./..."`.
    pub fn to_notation(&self) -> String {
        self.squares()
            .chunks(3)
            .map(|row| row.iter().map(|&sq| cell_symbol(sq)).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Formats the board as a human-readable grid.
///
/// ```text
/// X|X|.
/// -+-+-
/// O|O|.
/// -+-+-
/// .|.|.
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares().chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let line = cells
                .iter()
                .map(|&sq| cell_symbol(sq).to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

fn cell_symbol(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}
