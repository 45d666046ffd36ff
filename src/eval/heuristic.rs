//! Heuristic evaluation of board positions
//!
//! Scores a position from Red's point of view based on:
//! - Advancement of each owned stack toward its goal row
//! - Stack height
//! - Center control
//! - Mobility (legal move count difference)
//! - Stacks one row short of, or on, the goal row

use crate::board::{Board, Color, Pos, BOARD_SIZE};
use crate::rules::count_moves;

use super::weights::{center_bonus, EvalWeight};

/// Evaluate the board. Positive favors Red, negative favors Blue.
///
/// Terminal positions are not special-cased here; the search checks for
/// crossing before it asks for a static score.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let material = evaluate_stacks(board);

    let mobility = EvalWeight::MOBILITY
        * (count_moves(board, Color::Red) as i32 - count_moves(board, Color::Blue) as i32);

    material + mobility + evaluate_back_rows(board)
}

/// Per-stack advancement, height and center terms
fn evaluate_stacks(board: &Board) -> i32 {
    board
        .occupied()
        .map(|(pos, top, height)| {
            let value = EvalWeight::ADVANCE * top.advance(pos.row)
                + EvalWeight::HEIGHT * height as i32
                + center_bonus(pos.col);
            sign(top) * value
        })
        .sum()
}

/// Near-goal and goal-row bonuses
fn evaluate_back_rows(board: &Board) -> i32 {
    let mut score = 0;
    for color in [Color::Red, Color::Blue] {
        let goal = color.goal_row();
        let near = (i32::from(goal) - i32::from(color.forward())) as u8;
        for col in 0..BOARD_SIZE as u8 {
            if board.top(Pos::new(near, col)) == Some(color) {
                score += sign(color) * EvalWeight::NEAR_GOAL;
            }
            if board.top(Pos::new(goal, col)) == Some(color) {
                score += sign(color) * EvalWeight::GOAL;
            }
        }
    }
    score
}

#[inline]
fn sign(color: Color) -> i32 {
    match color {
        Color::Red => 1,
        Color::Blue => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::initial_board;

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate(&initial_board()), 0);
    }

    #[test]
    fn test_single_stack_terms() {
        // Red single block at row 2, column 3 can step down onto all
        // four empty neighbors, backward included
        let mut board = Board::new();
        board.push(Pos::new(2, 3), Color::Red);
        assert_eq!(count_moves(&board, Color::Red), 4);
        assert_eq!(evaluate(&board), 14 * 2 + 4 + 4 + 3 * 4);
    }

    #[test]
    fn test_evaluation_is_color_symmetric() {
        // Mirror a Red stack into a Blue stack on the flipped row
        let mut red = Board::new();
        red.set_stack(Pos::new(1, 2), &[Color::Blue, Color::Red]);
        let mut blue = Board::new();
        blue.set_stack(Pos::new(6, 2), &[Color::Red, Color::Blue]);
        assert_eq!(evaluate(&red), -evaluate(&blue));
    }

    #[test]
    fn test_near_goal_and_goal_bonus() {
        let mut near = Board::new();
        near.push(Pos::new(6, 0), Color::Red);
        let mut far = Board::new();
        far.push(Pos::new(5, 0), Color::Red);
        // One more row of advance plus the near-goal bonus
        assert!(evaluate(&near) - evaluate(&far) >= 14 + 40 - 3 * 4);

        let mut goal = Board::new();
        goal.push(Pos::new(0, 0), Color::Blue);
        assert!(evaluate(&goal) <= -(14 * 7 + 120));
    }

    #[test]
    fn test_advanced_side_scores_higher() {
        let mut board = initial_board();
        // Take a Blue block off the front and give it to Red
        let from = Pos::new(4, 0);
        let block = board.pop(from);
        assert_eq!(block, Some(Color::Blue));
        board.push(Pos::new(3, 1), Color::Red);
        assert!(evaluate(&board) > 0);
    }
}
