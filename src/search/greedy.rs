//! One-ply greedy move choice

use crate::board::{Board, Color};
use crate::eval::{evaluate, order_moves};
use crate::rules::{apply_move, generate_moves, Move};

/// Best move by one-ply lookahead, with its resulting evaluation.
///
/// Moves are tried in ordering-heuristic order and a later move replaces
/// the current best only on strict improvement, so the first of equally
/// scored moves wins. Red maximizes, Blue minimizes.
#[must_use]
pub fn greedy_move(board: &Board, color: Color) -> Option<(Move, i32)> {
    let moves = generate_moves(board, color);
    let ordered = order_moves(board, color, &moves, None);

    let mut best: Option<(Move, i32)> = None;
    for mv in ordered {
        let score = evaluate(&apply_move(board, &mv));
        let better = match best {
            None => true,
            Some((_, best_score)) => match color {
                Color::Red => score > best_score,
                Color::Blue => score < best_score,
            },
        };
        if better {
            best = Some((mv, score));
        }
    }
    best
}
