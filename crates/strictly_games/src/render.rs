//! Plain-text rendering of boards and game status.

use strictly_tictactoe::{Board, Move, Outcome, Player, Square, WinningLine};

/// Renders the board as a grid with row and column labels.
///
/// Squares on `highlight` are wrapped in brackets.
///
/// ```text
///     0   1   2
/// 0  [X]|[X]|[X]
///    ---+---+---
/// 1   O | O |
///    ---+---+---
/// 2     |   |
/// ```
pub fn render_board(board: &Board, highlight: Option<&WinningLine>) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..3 {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        let cells = (0..3)
            .map(|col| {
                let symbol = match board.get(row, col) {
                    Some(Square::Occupied(Player::X)) => 'X',
                    Some(Square::Occupied(Player::O)) => 'O',
                    Some(Square::Empty) | None => ' ',
                };
                if highlight.is_some_and(|line| line.contains(Move::new(row, col))) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&format!("{row}  {}\n", cells.trim_end()));
    }
    out
}

/// One-line description of whose turn it is or how the game ended.
pub fn render_status(board: &Board) -> String {
    match board.outcome() {
        Outcome::InProgress => format!("{} to move", board.current_player()),
        Outcome::Draw => "Draw".to_string(),
        outcome => match board.winning_line() {
            Some(line) => format!("{outcome} on {}", render_cells(&line)),
            None => outcome.to_string(),
        },
    }
}

/// Lists the coordinates of a winning line, e.g. `(0, 0) (0, 1) (0, 2)`.
pub fn render_cells(line: &WinningLine) -> String {
    line.cells()
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lists the free squares, e.g. `free: (0, 2) (2, 1)`.
pub fn render_hints(board: &Board) -> String {
    let moves = board
        .legal_moves()
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("free: {moves}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::new(), None);
        assert!(text.starts_with("    0   1   2\n"));
        assert_eq!(text.lines().count(), 6);
        assert!(!text.contains('X'));
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let line = board.winning_line();
        let text = render_board(&board, line.as_ref());
        assert!(text.contains("0  [X]|[X]|[X]"));
        assert!(text.contains("1   O | O |"));
    }

    #[test]
    fn test_render_status() {
        assert_eq!(render_status(&Board::new()), "X to move");

        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(render_status(&won), "X wins on (0, 0) (0, 1) (0, 2)");

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(render_status(&drawn), "Draw");
    }

    #[test]
    fn test_render_hints() {
        let board: Board = "XOX/OXX/O..".parse().unwrap();
        assert_eq!(render_hints(&board), "free: (2, 1) (2, 2)");
    }
}
