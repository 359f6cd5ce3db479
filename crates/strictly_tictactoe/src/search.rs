//! Adversarial search for tic-tac-toe.
//!
//! Full-depth minimax with alpha-beta pruning. X maximizes and O minimizes
//! the [`Score`] of the final position. The tree is small enough that every
//! search runs to the end of the game; there is no depth limit, transposition
//! table or clock.
//!
//! Moves are tried in row-major order and a child only replaces the current
//! best when it is strictly better, so among equally good moves the earliest
//! one is chosen. The same board always produces the same move.

use super::action::Move;
use super::outcome::Score;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Analysis {
    /// Optimal move for the side to play, `None` on a terminal board.
    #[getter(copy)]
    best: Option<Move>,
    /// Game-theoretic value of the position under perfect play.
    #[getter(copy)]
    value: Score,
    /// Number of positions visited.
    #[getter(copy)]
    nodes: u64,
}

/// Value and move returned by one level of the recursion.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    value: Score,
    best: Option<Move>,
    nodes: u64,
}

impl Evaluation {
    fn leaf(value: Score) -> Self {
        Self {
            value,
            best: None,
            nodes: 1,
        }
    }
}

/// Returns the optimal move for the side to play.
///
/// Returns `None` if the board is terminal.
pub fn best_move(board: &Board) -> Option<Move> {
    analyze(board).best
}

/// Searches the position to the end of the game.
#[instrument(skip(board), fields(board = %board.to_notation(), to_move = %board.current_player()))]
pub fn analyze(board: &Board) -> Analysis {
    let eval = match board.current_player() {
        Player::X => max_value(board, Score::MIN, Score::MAX),
        Player::O => min_value(board, Score::MIN, Score::MAX),
    };

    debug!(
        best = ?eval.best,
        value = eval.value,
        nodes = eval.nodes,
        "Search complete"
    );

    Analysis {
        best: eval.best,
        value: eval.value,
        nodes: eval.nodes,
    }
}

/// X to move: raise `alpha` until it meets `beta`.
fn max_value(board: &Board, mut alpha: Score, beta: Score) -> Evaluation {
    if let Some(value) = board.outcome().score() {
        return Evaluation::leaf(value);
    }

    let mut eval = Evaluation {
        value: Score::MIN,
        best: None,
        nodes: 1,
    };

    for mv in board.legal_moves() {
        // legal_moves only yields empty squares on a board without a winner.
        let Ok(child) = board.apply_move(mv) else {
            continue;
        };
        let reply = min_value(&child, alpha, beta);
        eval.nodes += reply.nodes;

        if reply.value > eval.value {
            eval.value = reply.value;
            eval.best = Some(mv);
        }

        alpha = alpha.max(eval.value);
        if beta <= alpha {
            break;
        }
    }

    eval
}

/// O to move: lower `beta` until it meets `alpha`.
fn min_value(board: &Board, alpha: Score, mut beta: Score) -> Evaluation {
    if let Some(value) = board.outcome().score() {
        return Evaluation::leaf(value);
    }

    let mut eval = Evaluation {
        value: Score::MAX,
        best: None,
        nodes: 1,
    };

    for mv in board.legal_moves() {
        let Ok(child) = board.apply_move(mv) else {
            continue;
        };
        let reply = max_value(&child, alpha, beta);
        eval.nodes += reply.nodes;

        if reply.value < eval.value {
            eval.value = reply.value;
            eval.best = Some(mv);
        }

        beta = beta.min(eval.value);
        if beta <= alpha {
            break;
        }
    }

    eval
}
