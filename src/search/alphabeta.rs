//! Depth-bounded minimax with alpha-beta pruning
//!
//! Red is the maximizing player and Blue the minimizing one, matching the
//! sign convention of [`evaluate`]. Every recursive call is a pure function
//! of its board and window and returns its own node count, so identical
//! inputs always visit identical trees.
//!
//! # Example
//!
//! ```
//! use towers::board::{initial_board, Color};
//! use towers::search::Searcher;
//!
//! let board = initial_board();
//! let result = Searcher::new().search(&board, Color::Red, 2);
//! if let Some(mv) = result.best_move {
//!     println!("Best move: {mv}");
//! }
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Color};
use crate::eval::{evaluate, order_moves, EvalWeight};
use crate::rules::{apply_move, crossing_winner, generate_moves, Move};

/// Bound outside every reachable score
const INF: i32 = EvalWeight::CROSSING + 1;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax score of the root (Red-positive)
    pub score: i32,
    /// Requested depth
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Whether the deadline cut part of the tree to static evaluation
    pub timed_out: bool,
}

/// Value of one subtree
#[derive(Debug, Clone, Copy)]
struct Node {
    score: i32,
    best_move: Option<Move>,
    nodes: u64,
    timed_out: bool,
}

impl Node {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
            nodes: 1,
            timed_out: false,
        }
    }
}

/// Alpha-beta searcher.
///
/// Holds only the optional deadline; no state carries over between
/// searches or between sibling branches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    deadline: Option<Instant>,
}

impl Searcher {
    /// Searcher without a time limit
    #[must_use]
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Searcher that stops expanding nodes below the root once `limit` has
    /// elapsed from now. Unexpanded nodes get their static evaluation, so the
    /// search still returns the best move found with what was gathered.
    #[must_use]
    pub fn with_time_limit(limit: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + limit),
        }
    }

    /// Search `depth` plies for `color`.
    #[must_use]
    pub fn search(&self, board: &Board, color: Color, depth: u8) -> SearchResult {
        let node = self.minimax(board, color, depth, 0, -INF, INF);
        SearchResult {
            best_move: node.best_move,
            score: node.score,
            depth,
            nodes: node.nodes,
            timed_out: node.timed_out,
        }
    }

    #[inline]
    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    fn minimax(
        &self,
        board: &Board,
        color: Color,
        depth: u8,
        ply: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Node {
        // Terminal: someone has crossed
        if let Some(winner) = crossing_winner(board) {
            return Node::leaf(match winner {
                Color::Red => EvalWeight::CROSSING,
                Color::Blue => -EvalWeight::CROSSING,
            });
        }

        if depth == 0 {
            return Node::leaf(evaluate(board));
        }
        // The root always expands so a move comes back
        if ply > 0 && self.expired() {
            return Node {
                timed_out: true,
                ..Node::leaf(evaluate(board))
            };
        }

        let moves = generate_moves(board, color);
        if moves.is_empty() {
            // Locked out: the side to move loses
            return Node::leaf(match color {
                Color::Red => -EvalWeight::LOCKOUT,
                Color::Blue => EvalWeight::LOCKOUT,
            });
        }

        let maximizing = color == Color::Red;
        let mut best = Node {
            score: if maximizing { -INF } else { INF },
            best_move: None,
            nodes: 1,
            timed_out: false,
        };

        for mv in order_moves(board, color, &moves, None) {
            let child = self.minimax(
                &apply_move(board, &mv),
                color.opponent(),
                depth - 1,
                ply + 1,
                alpha,
                beta,
            );
            best.nodes += child.nodes;
            best.timed_out |= child.timed_out;

            if maximizing {
                if child.score > best.score {
                    best.score = child.score;
                    best.best_move = Some(mv);
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best.score = child.score;
                    best.best_move = Some(mv);
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }
}
