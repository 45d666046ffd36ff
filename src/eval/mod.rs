//! Position evaluation and move ordering

pub mod heuristic;
pub mod ordering;
pub mod weights;

pub use heuristic::evaluate;
pub use ordering::{move_weight, order_moves};
pub use weights::{center_bonus, EvalWeight, OrderWeight};
