//! Win conditions
//!
//! Three ways to win:
//! 1. Crossing: a block of your color tops a stack on the opponent's back row
//! 2. Lockout: the opponent is to move and has no legal move (no passing)
//! 3. Repetition: the opponent bounced between the same two squares with
//!    three direction changes in a row
//!
//! Status is re-derived after every move in that priority order:
//! repetition, crossing, then lockout for the side now to move.

use crate::board::{Board, Color, Pos, BOARD_SIZE};

use super::legality::Move;
use super::movegen::has_legal_moves;

/// Direction changes between the same two squares that lose the game
pub const REPETITION_LIMIT: u8 = 3;

/// How a game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinMode {
    Crossing,
    Lockout,
    Repetition,
}

impl WinMode {
    pub fn describe(self) -> &'static str {
        match self {
            WinMode::Crossing => "crossing",
            WinMode::Lockout => "lockout",
            WinMode::Repetition => "repetition",
        }
    }
}

/// Turn state: waiting for `color` to move, or finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    AwaitingMove(Color),
    Terminal { mode: WinMode, winner: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Terminal { .. })
    }

    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Terminal { winner, .. } => Some(winner),
            GameStatus::AwaitingMove(_) => None,
        }
    }
}

/// Color that has crossed the board, if any.
///
/// Red wins with a Red top on row 7, Blue with a Blue top on row 0.
/// Only the mover of the last ply can have crossed, so at most one
/// holds in a real game; Red is reported first otherwise.
#[must_use]
pub fn crossing_winner(board: &Board) -> Option<Color> {
    [Color::Red, Color::Blue].into_iter().find(|&color| {
        (0..BOARD_SIZE as u8).any(|col| board.top(Pos::new(color.goal_row(), col)) == Some(color))
    })
}

/// Per-color bounce tracker.
///
/// Remembers the unordered pair of squares of this color's last move, the
/// direction flag of that move and how many consecutive direction changes
/// were seen on that same pair.
///
/// The direction flag compares square identifiers (`from < to` in
/// row-major order), not geometric direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RepetitionTracker {
    pub pair: Option<(Pos, Pos)>,
    pub ascending: bool,
    pub count: u8,
}

impl RepetitionTracker {
    /// Record a move by the owning color.
    /// Returns the new tracker and whether the repetition limit was reached.
    #[must_use]
    pub fn record(self, mv: &Move) -> (Self, bool) {
        let endpoints = if mv.from < mv.to {
            (mv.from, mv.to)
        } else {
            (mv.to, mv.from)
        };
        let ascending = mv.from < mv.to;

        if self.pair == Some(endpoints) {
            let count = if ascending != self.ascending {
                self.count.saturating_add(1)
            } else {
                self.count
            };
            let next = Self {
                pair: self.pair,
                ascending,
                count,
            };
            (next, count >= REPETITION_LIMIT)
        } else {
            let next = Self {
                pair: Some(endpoints),
                ascending,
                count: 0,
            };
            (next, false)
        }
    }
}

/// Both colors' trackers. Each is touched only by its own color's moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RepetitionState {
    pub red: RepetitionTracker,
    pub blue: RepetitionTracker,
}

/// Outcome of feeding one move into `RepetitionState::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepetitionUpdate {
    pub state: RepetitionState,
    /// Opponent of the mover when the mover hit the repetition limit
    pub winner: Option<Color>,
}

impl RepetitionState {
    #[inline]
    pub fn tracker(&self, color: Color) -> &RepetitionTracker {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    /// Feed the move `mv` just played by `color`. Call exactly once per
    /// accepted move, after the move is applied.
    #[must_use]
    pub fn update(self, color: Color, mv: &Move) -> RepetitionUpdate {
        let (tracker, repeated) = self.tracker(color).record(mv);
        let mut state = self;
        match color {
            Color::Red => state.red = tracker,
            Color::Blue => state.blue = tracker,
        }
        RepetitionUpdate {
            state,
            winner: repeated.then(|| color.opponent()),
        }
    }
}

/// Derive the status after a move.
///
/// `to_move` is the side whose turn it would be next and
/// `repetition_winner` the result of the mover's tracker update.
#[must_use]
pub fn game_status(board: &Board, to_move: Color, repetition_winner: Option<Color>) -> GameStatus {
    if let Some(winner) = repetition_winner {
        return GameStatus::Terminal {
            mode: WinMode::Repetition,
            winner,
        };
    }
    if let Some(winner) = crossing_winner(board) {
        return GameStatus::Terminal {
            mode: WinMode::Crossing,
            winner,
        };
    }
    if !has_legal_moves(board, to_move) {
        return GameStatus::Terminal {
            mode: WinMode::Lockout,
            winner: to_move.opponent(),
        };
    }
    GameStatus::AwaitingMove(to_move)
}
