//! Move legality: classifying a candidate step from one stack to a neighbor
//!
//! A move always takes the single top block of the source stack and puts it
//! on the orthogonally adjacent destination stack. Whether that is allowed
//! depends on the height difference, the destination's top color and on
//! whether the step goes backward for the mover.

use crate::board::{Board, Color, Pos};

/// Kind of a legal move. Derived from the position, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Onto an own-colored stack of equal height
    Across,
    /// Down 1-2 levels onto an empty cell or an own-colored stack
    StepDown,
    /// Down 1-2 levels onto an opponent-topped stack, burying it
    Capture,
}

/// A classified move between two orthogonally adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    /// Whether the row step goes toward `color`'s goal row
    #[inline]
    pub fn is_forward(&self, color: Color) -> bool {
        i16::from(self.to.row) - i16::from(self.from.row) == i16::from(color.forward())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = match self.kind {
            MoveKind::Capture => 'x',
            MoveKind::StepDown => '\\',
            MoveKind::Across => '-',
        };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Classify the step of `color`'s top block from `from` to `to`.
///
/// Returns `None` for anything illegal: off-board coordinates, cells that
/// are not orthogonal neighbors, an empty or foreign source stack, or a
/// step the height/color rules reject. Never panics, so both move
/// generation and click validation can call it on raw input.
#[must_use]
pub fn classify(board: &Board, color: Color, from: Pos, to: Pos) -> Option<MoveKind> {
    if !from.in_bounds() || !to.in_bounds() || from.distance(to) != 1 {
        return None;
    }
    if board.top(from) != Some(color) {
        return None;
    }

    let src_height = board.height(from) as i32;
    let delta = board.height(to) as i32 - src_height;
    let top_dst = board.top(to);
    let row_step = i32::from(to.row) - i32::from(from.row);
    let backward = row_step == -i32::from(color.forward());

    // Backward moves must strictly lose height
    if backward && delta >= 0 {
        return None;
    }

    if delta == -1 || delta == -2 {
        return match top_dst {
            Some(top) if top != color => Some(MoveKind::Capture),
            _ => Some(MoveKind::StepDown),
        };
    }

    match top_dst {
        Some(top) if top == color && delta == 0 => Some(MoveKind::Across),
        // Empty cell out of step-down range, climbing own stacks,
        // or an opponent without the 1-2 height advantage
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stacks: &[((u8, u8), &[Color])]) -> Board {
        let mut board = Board::new();
        for &((r, c), blocks) in stacks {
            board.set_stack(Pos::new(r, c), blocks);
        }
        board
    }

    use Color::{Blue as B, Red as R};

    #[test]
    fn test_rejects_bad_geometry() {
        let board = board_with(&[((3, 3), &[R]), ((3, 4), &[R]), ((4, 4), &[R])]);
        // Diagonal
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(4, 4)), None);
        // Same square
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(3, 3)), None);
        // Off board
        let off = Pos { row: 3, col: 8 };
        assert_eq!(classify(&board, R, Pos::new(3, 7), off), None);
        assert_eq!(classify(&board, R, off, Pos::new(3, 7)), None);
    }

    #[test]
    fn test_rejects_empty_or_foreign_source() {
        let board = board_with(&[((3, 3), &[B]), ((3, 4), &[B])]);
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(3, 4)), None);
        assert_eq!(classify(&board, R, Pos::new(2, 3), Pos::new(3, 3)), None);
        assert_eq!(
            classify(&board, B, Pos::new(3, 3), Pos::new(3, 4)),
            Some(MoveKind::Across)
        );
    }

    #[test]
    fn test_across_needs_own_color_equal_height() {
        let board = board_with(&[
            ((3, 3), &[R, R]),
            ((3, 4), &[B, R]),
            ((3, 2), &[R, R, R]),
            ((4, 3), &[R]),
        ]);
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(3, 4)),
            Some(MoveKind::Across)
        );
        // Climbing an own stack is not allowed
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(3, 2)), None);
    }

    #[test]
    fn test_forward_across_allowed_backward_across_rejected() {
        let board = board_with(&[((3, 3), &[R]), ((4, 3), &[R]), ((2, 3), &[R])]);
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(4, 3)),
            Some(MoveKind::Across)
        );
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(2, 3)), None);

        // For Blue the directions flip
        let board = board_with(&[((3, 3), &[B]), ((4, 3), &[B]), ((2, 3), &[B])]);
        assert_eq!(
            classify(&board, B, Pos::new(3, 3), Pos::new(2, 3)),
            Some(MoveKind::Across)
        );
        assert_eq!(classify(&board, B, Pos::new(3, 3), Pos::new(4, 3)), None);
    }

    #[test]
    fn test_step_down_onto_empty_and_own() {
        let board = board_with(&[
            ((3, 3), &[R, R]),
            ((3, 4), &[R]),
        ]);
        // 2 -> empty (delta -2)
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(4, 3)),
            Some(MoveKind::StepDown)
        );
        // 2 -> own 1 (delta -1)
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(3, 4)),
            Some(MoveKind::StepDown)
        );
        // Backward step down is fine because height drops
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(2, 3)),
            Some(MoveKind::StepDown)
        );
    }

    #[test]
    fn test_step_down_range_onto_empty() {
        let board = board_with(&[((3, 3), &[R])]);
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(4, 3)),
            Some(MoveKind::StepDown)
        );

        // A tall stack dropping 3+ levels onto an empty cell is illegal
        let board = board_with(&[((3, 3), &[R, R, R])]);
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(4, 3)), None);
    }

    #[test]
    fn test_capture_needs_one_or_two_levels() {
        let board = board_with(&[
            ((3, 3), &[R, R, R]),
            ((3, 4), &[B]),
            ((3, 2), &[B, B]),
            ((4, 3), &[B, B, B]),
            ((2, 3), &[R, B, B]),
        ]);
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(3, 4)),
            Some(MoveKind::Capture)
        );
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(3, 2)),
            Some(MoveKind::Capture)
        );
        // Equal height opponent: no capture
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(4, 3)), None);
        // Backward, equal height: rejected by the backward guard
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(2, 3)), None);
    }

    #[test]
    fn test_backward_capture_allowed_when_losing_height() {
        let board = board_with(&[((3, 3), &[R, R]), ((2, 3), &[B])]);
        assert_eq!(
            classify(&board, R, Pos::new(3, 3), Pos::new(2, 3)),
            Some(MoveKind::Capture)
        );
    }

    #[test]
    fn test_no_climbing_onto_opponent() {
        let board = board_with(&[((3, 3), &[R]), ((4, 3), &[B, B])]);
        assert_eq!(classify(&board, R, Pos::new(3, 3), Pos::new(4, 3)), None);
    }

    #[test]
    fn test_move_is_forward() {
        let mv = Move::new(Pos::new(3, 3), Pos::new(4, 3), MoveKind::Across);
        assert!(mv.is_forward(Color::Red));
        assert!(!mv.is_forward(Color::Blue));
        let side = Move::new(Pos::new(3, 3), Pos::new(3, 4), MoveKind::Across);
        assert!(!side.is_forward(Color::Red));
        assert!(!side.is_forward(Color::Blue));
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Pos::new(0, 0), Pos::new(1, 0), MoveKind::Capture);
        assert_eq!(mv.to_string(), "a1xa2");
    }
}
