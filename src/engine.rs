//! Main AI engine integrating the move choosers
//!
//! The engine picks a move with one of three strategies:
//!
//! 1. **Random**: uniform choice over legal moves
//! 2. **Greedy**: best static evaluation one ply ahead
//! 3. **Minimax**: alpha-beta search to a fixed depth
//!
//! Minimax falls back to Greedy and Greedy to Random when they come back
//! without a move. With at least one legal move this never leaves the
//! caller empty-handed.
//!
//! # Example
//!
//! ```
//! use towers::{AIEngine, Color, Strategy, initial_board};
//!
//! let mut engine = AIEngine::with_seed(Strategy::Minimax { depth: 2 }, 7);
//! let board = initial_board();
//!
//! let result = engine.get_move_with_stats(&board, Color::Red);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::rules::{apply_move, count_moves, Move};
use crate::search::{greedy_move, random_move, Searcher};

/// Move selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    Greedy,
    Minimax { depth: u8 },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Minimax { depth: 3 }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Random => f.write_str("random"),
            Strategy::Greedy => f.write_str("greedy"),
            Strategy::Minimax { depth } => write!(f, "minimax(depth {depth})"),
        }
    }
}

/// Which chooser actually produced the move.
///
/// Differs from the configured strategy when a fallback kicked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Random,
    Greedy,
    Minimax,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` only when the side has no legal move
    pub best_move: Option<Move>,
    /// Red-positive score backing the choice (static eval after the move
    /// for Random and Greedy, the minimax value for Minimax)
    pub score: i32,
    /// Chooser that produced the move
    pub search_type: SearchType,
    /// Nodes visited
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn random(board: &Board, mv: Option<Move>, time_ms: u64) -> Self {
        Self {
            best_move: mv,
            score: mv.map_or_else(|| evaluate(board), |m| evaluate(&apply_move(board, &m))),
            search_type: SearchType::Random,
            nodes: 1,
            time_ms,
        }
    }

    #[inline]
    fn greedy(mv: Move, score: i32, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score,
            search_type: SearchType::Greedy,
            nodes,
            time_ms,
        }
    }
}

/// Pick a move for `color` with `strategy`, drawing randomness from `rng`.
///
/// Returns `None` only if `color` has no legal move.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    strategy: Strategy,
    rng: &mut R,
) -> Option<Move> {
    select_move(board, color, strategy, None, rng).best_move
}

/// Run `strategy` and its fallback chain, collecting statistics
fn select_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    strategy: Strategy,
    time_limit: Option<Duration>,
    rng: &mut R,
) -> MoveResult {
    let start = Instant::now();
    let elapsed_ms = || start.elapsed().as_millis() as u64;

    if let Strategy::Minimax { depth } = strategy {
        let searcher = time_limit.map_or_else(Searcher::new, Searcher::with_time_limit);
        let result = searcher.search(board, color, depth);
        if result.timed_out {
            debug!(depth, nodes = result.nodes, "search deadline reached");
        }
        if let Some(mv) = result.best_move {
            return MoveResult {
                best_move: Some(mv),
                score: result.score,
                search_type: SearchType::Minimax,
                nodes: result.nodes,
                time_ms: elapsed_ms(),
            };
        }
        warn!(%color, depth, "minimax returned no move, falling back to greedy");
    }

    if matches!(strategy, Strategy::Greedy | Strategy::Minimax { .. }) {
        if let Some((mv, score)) = greedy_move(board, color) {
            let nodes = count_moves(board, color) as u64 + 1;
            return MoveResult::greedy(mv, score, nodes, elapsed_ms());
        }
        debug!(%color, "greedy found no move, falling back to random");
    }

    let mv = random_move(board, color, None, rng);
    MoveResult::random(board, mv, elapsed_ms())
}

/// AI engine for the tower game.
///
/// Owns the strategy, an optional time limit for minimax and a seedable
/// random number generator used by the Random strategy and its fallback.
///
/// # Example
///
/// ```
/// use towers::{AIEngine, Color, Strategy, initial_board};
///
/// let mut engine = AIEngine::with_seed(Strategy::Random, 1);
/// let board = initial_board();
/// if let Some(mv) = engine.get_move(&board, Color::Blue) {
///     println!("Play {mv}");
/// }
/// ```
pub struct AIEngine {
    strategy: Strategy,
    time_limit: Option<Duration>,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with the default strategy (minimax, depth 3), seeded from
    /// the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(Strategy::default())
    }

    /// Engine with the given strategy, seeded from the operating system.
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            time_limit: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a fixed seed for reproducible play.
    #[must_use]
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            time_limit: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the move for the given position, if any.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Color) -> MoveResult {
        let result = select_move(board, color, self.strategy, self.time_limit, &mut self.rng);
        debug!(
            %color,
            strategy = %self.strategy,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move chosen: {}",
            result
                .best_move
                .map_or_else(|| "none".to_string(), |m| m.to_string())
        );
        result
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Limit minimax thinking time. `None` removes the limit.
    pub fn set_time_limit(&mut self, time_limit: Option<Duration>) {
        self.time_limit = time_limit;
    }

    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
