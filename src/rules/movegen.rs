//! Legal move generation

use crate::board::{Board, Color, Direction};

use super::legality::{classify, Move};

/// All legal moves for `color`.
///
/// Scans owned stacks row-major and tries the neighbors in
/// `Direction::ALL` order (Up, Down, Left, Right). The order is stable so
/// searches that depend on it replay deterministically.
#[must_use]
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for from in board.owned_by(color) {
        for dir in Direction::ALL {
            let Some(to) = from.step(dir) else {
                continue;
            };
            if let Some(kind) = classify(board, color, from, to) {
                moves.push(Move::new(from, to, kind));
            }
        }
    }
    moves
}

/// Whether `color` has at least one legal move. Stops at the first hit.
#[must_use]
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    board.owned_by(color).any(|from| {
        Direction::ALL.iter().any(|&dir| {
            from.step(dir)
                .is_some_and(|to| classify(board, color, from, to).is_some())
        })
    })
}

/// Number of legal moves for `color` (mobility)
#[must_use]
pub fn count_moves(board: &Board, color: Color) -> usize {
    board
        .owned_by(color)
        .map(|from| {
            Direction::ALL
                .iter()
                .filter_map(|&dir| from.step(dir))
                .filter(|&to| classify(board, color, from, to).is_some())
                .count()
        })
        .sum()
}
