//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The eight lines of three, checked in this order: rows top to bottom,
/// columns left to right, then the main and anti diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// A completed line of three and the player holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinningLine {
    /// The player with three in a row.
    #[getter(copy)]
    player: Player,
    /// Coordinates of the three squares.
    cells: [Move; 3],
}

impl WinningLine {
    /// Checks whether `mv` is one of the three winning squares.
    pub fn contains(&self, mv: Move) -> bool {
        self.cells.contains(&mv)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` if no line holds three identical marks.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&cells| {
        line_owner(board, cells).map(|player| WinningLine { player, cells })
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}

/// Checks whether `player` holds any line, not just the first one found.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|&cells| line_owner(board, cells) == Some(player))
}

fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    let sq = board.get(a.row, a.col)?;
    let owner = sq.player()?;
    (board.get(b.row, b.col) == Some(sq) && board.get(c.row, c.col) == Some(sq)).then_some(owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player(), Player::X);
        assert_eq!(
            *line.cells(),
            [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]
        );
        assert!(line.contains(Move::new(0, 1)));
        assert!(!line.contains(Move::new(1, 1)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player(), Player::O);
        assert_eq!(
            *line.cells(),
            [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]
        );
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // X completes row 0 and column 0 with the same move.
        let board: Board = "XXX/XOO/XOO".parse().unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(
            *line.cells(),
            [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]
        );
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
