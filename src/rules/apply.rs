//! Applying a validated move

use crate::board::Board;

use super::legality::Move;

/// Produce the board after `mv`.
///
/// `mv` must already be classified as legal; it is not re-validated.
/// The top block of the source stack moves onto the destination stack.
/// Nothing is ever removed: a capture buries the defender's blocks.
#[must_use]
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    debug_assert!(
        !board.is_empty(mv.from),
        "move {mv} from an empty stack"
    );
    let mut next = board.clone();
    if let Some(block) = next.pop(mv.from) {
        next.push(mv.to, block);
    }
    debug_assert_eq!(next.block_count(), board.block_count());
    next
}
