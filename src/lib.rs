//! Towers: a two-player stacked-block race game with an AI engine
//!
//! Red and Blue each start with 32 single blocks filling their half of an
//! 8x8 board. On each turn a player moves the top block of one of their
//! stacks onto an orthogonally adjacent stack:
//! - Across onto an own-colored stack of the same height
//! - Step down 1-2 levels onto an empty cell or an own-colored stack
//! - Capture by stepping down 1-2 levels onto an opponent-topped stack
//! - Backward steps must strictly lose height
//!
//! A player wins by topping a stack on the opponent's back row (crossing),
//! when the opponent has no legal move (lockout), or when the opponent
//! bounces between the same two squares too often (repetition).
//!
//! # Architecture
//!
//! - [`board`]: Board representation as a grid of stacks
//! - [`rules`]: Move legality, generation, application and win detection
//! - [`eval`]: Static evaluation and move ordering
//! - [`search`]: Random, greedy and alpha-beta move choosers
//! - [`engine`]: AI engine with strategy fallback and statistics
//! - [`session`]: Turn state machine with undo
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use towers::{AIEngine, Session, Strategy};
//!
//! let mut session = Session::new();
//! let mut engine = AIEngine::with_seed(Strategy::Minimax { depth: 2 }, 1);
//!
//! // AI plays both sides for a few plies
//! for _ in 0..4 {
//!     let Some(mv) = engine.get_move(session.board(), session.to_move()) else {
//!         break;
//!     };
//!     let status = session.play(mv.from, mv.to).unwrap();
//!     println!("{mv} -> {status:?}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{initial_board, Board, Color, Pos, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{choose_move, AIEngine, MoveResult, SearchType, Strategy};
pub use error::{ConfigError, MoveError};
pub use rules::{GameStatus, Move, MoveKind, WinMode};
pub use session::Session;
