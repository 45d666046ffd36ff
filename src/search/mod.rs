//! Search module for the tower game AI
//!
//! Contains the three move choosers:
//! - Uniform random choice
//! - One-ply greedy lookahead
//! - Depth-bounded minimax with alpha-beta pruning

pub mod alphabeta;
pub mod greedy;
pub mod random;

pub use alphabeta::{SearchResult, Searcher};
pub use greedy::greedy_move;
pub use random::random_move;
