//! Game rules for the tower game
//!
//! This module implements the rule set:
//! - Move legality (Across, StepDown, Capture)
//! - Legal move generation
//! - Move application
//! - Win conditions (crossing, lockout, repetition)

pub mod apply;
pub mod legality;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use apply::apply_move;
pub use legality::{classify, Move, MoveKind};
pub use movegen::{count_moves, generate_moves, has_legal_moves};
pub use win::{
    crossing_winner, game_status, GameStatus, RepetitionState, RepetitionTracker,
    RepetitionUpdate, WinMode, REPETITION_LIMIT,
};
