//! Move ordering
//!
//! Ranks candidate moves so alpha-beta sees the promising ones first and
//! the greedy player breaks ties toward them.

use crate::board::{Board, Color};
use crate::rules::{Move, MoveKind};

use super::weights::{center_bonus, OrderWeight};

/// Heuristic weight of a single move for `color`.
///
/// Captures first, then step-downs; forward progress, central files and a
/// taller resulting stack (capped) break the rest.
#[must_use]
pub fn move_weight(board: &Board, color: Color, mv: &Move) -> i32 {
    let kind = match mv.kind {
        MoveKind::Capture => OrderWeight::CAPTURE,
        MoveKind::StepDown => OrderWeight::STEP_DOWN,
        MoveKind::Across => 0,
    };
    let forward = if mv.is_forward(color) {
        OrderWeight::FORWARD
    } else {
        0
    };
    let height_after = (board.height(mv.to) as i32 + 1).min(OrderWeight::HEIGHT_CAP);

    kind + forward + center_bonus(mv.to.col) + height_after
}

/// Sort `moves` by descending weight. The sort is stable, so equal weights
/// keep generation order.
///
/// `avoid` names a move to push toward the back of the list; pass `None`
/// for plain ordering.
#[must_use]
pub fn order_moves(board: &Board, color: Color, moves: &[Move], avoid: Option<&Move>) -> Vec<Move> {
    let mut weighted: Vec<(i32, Move)> = moves
        .iter()
        .map(|mv| {
            let mut weight = move_weight(board, color, mv);
            if avoid.is_some_and(|a| a.from == mv.from && a.to == mv.to) {
                weight -= OrderWeight::AVOID_PENALTY;
            }
            (weight, *mv)
        })
        .collect();
    weighted.sort_by_key(|&(weight, _)| std::cmp::Reverse(weight));
    weighted.into_iter().map(|(_, mv)| mv).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{initial_board, Pos};
    use crate::rules::generate_moves;

    #[test]
    fn test_capture_ranks_first() {
        let mut board = Board::new();
        board.set_stack(Pos::new(3, 0), &[Color::Red, Color::Red]);
        board.set_stack(Pos::new(3, 1), &[Color::Blue]);

        let moves = generate_moves(&board, Color::Red);
        let ordered = order_moves(&board, Color::Red, &moves, None);
        assert_eq!(ordered[0].kind, MoveKind::Capture);
        assert_eq!(ordered[0].to, Pos::new(3, 1));
        assert_eq!(ordered.len(), moves.len());
    }

    #[test]
    fn test_move_weight_terms() {
        let board = initial_board();
        // Forward across onto d2: forward + center(3) + height 2
        let forward = Move::new(Pos::new(0, 3), Pos::new(1, 3), MoveKind::Across);
        assert_eq!(move_weight(&board, Color::Red, &forward), 8 + 4 + 2);
        // Sideways across onto a-file
        let side = Move::new(Pos::new(3, 1), Pos::new(3, 0), MoveKind::Across);
        assert_eq!(move_weight(&board, Color::Red, &side), 2);
    }

    #[test]
    fn test_height_term_is_capped() {
        let mut board = Board::new();
        board.set_stack(Pos::new(3, 0), &[Color::Red; 8]);
        board.set_stack(Pos::new(3, 1), &[Color::Blue; 7]);
        let mv = Move::new(Pos::new(3, 0), Pos::new(3, 1), MoveKind::Capture);
        assert_eq!(move_weight(&board, Color::Red, &mv), 50 + 6);
    }

    #[test]
    fn test_ordering_is_stable_for_ties() {
        let board = initial_board();
        let moves = generate_moves(&board, Color::Red);
        let ordered = order_moves(&board, Color::Red, &moves, None);
        for pair in ordered.windows(2) {
            let (a, b) = (
                move_weight(&board, Color::Red, &pair[0]),
                move_weight(&board, Color::Red, &pair[1]),
            );
            assert!(a >= b);
            if a == b {
                let ia = moves.iter().position(|m| *m == pair[0]);
                let ib = moves.iter().position(|m| *m == pair[1]);
                assert!(ia < ib);
            }
        }
    }

    #[test]
    fn test_avoid_move_goes_last() {
        let board = initial_board();
        let moves = generate_moves(&board, Color::Red);
        let best = order_moves(&board, Color::Red, &moves, None)[0];
        let ordered = order_moves(&board, Color::Red, &moves, Some(&best));
        assert_eq!(ordered.last(), Some(&best));
        assert_ne!(ordered[0], best);
    }
}
