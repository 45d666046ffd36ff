//! Scoring weights for evaluation and move ordering
//!
//! Evaluation is from Red's point of view: positive favors Red,
//! negative favors Blue.

/// Static evaluation weights
pub struct EvalWeight;

impl EvalWeight {
    // Terminal scores used by minimax
    /// A side has crossed the board
    pub const CROSSING: i32 = 999_999;
    /// The side to move has no legal move
    pub const LOCKOUT: i32 = 99_999;

    // Per-stack terms
    /// Per row advanced toward the goal, for each owned stack
    pub const ADVANCE: i32 = 14;
    /// Per block of height in an owned stack
    pub const HEIGHT: i32 = 4;

    /// Per legal move more than the opponent
    pub const MOBILITY: i32 = 3;

    // Back-row pressure
    /// Own top one row short of the goal row, per column
    pub const NEAR_GOAL: i32 = 40;
    /// Own top on the goal row, per column
    pub const GOAL: i32 = 120;
}

/// Move ordering weights
pub struct OrderWeight;

impl OrderWeight {
    pub const CAPTURE: i32 = 50;
    pub const STEP_DOWN: i32 = 10;
    pub const FORWARD: i32 = 8;
    /// Resulting destination height counts up to this cap
    pub const HEIGHT_CAP: i32 = 6;
    /// Subtracted from a move the caller wants deprioritized
    pub const AVOID_PENALTY: i32 = 1_000;
}

/// Bonus for controlling the middle files: 4 for columns 3-4,
/// 2 for columns 2 and 5, 0 on the wings.
#[inline]
pub fn center_bonus(col: u8) -> i32 {
    match col {
        3 | 4 => 4,
        2 | 5 => 2,
        _ => 0,
    }
}
