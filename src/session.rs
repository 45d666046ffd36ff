//! Game session: the turn state machine
//!
//! A `Session` bundles everything a front end needs between moves: the
//! current board, the side to move, both repetition trackers and the
//! derived status. Every accepted move goes through [`Session::play`],
//! which applies it, updates the mover's tracker exactly once, and
//! re-derives the status (repetition, crossing, lockout). Prior snapshots
//! are kept for undo.
//!
//! # Example
//!
//! ```
//! use towers::{Session, GameStatus, Color};
//!
//! let mut session = Session::new();
//! let mv = session.legal_moves()[0];
//! let status = session.play(mv.from, mv.to).unwrap();
//! assert_eq!(status, GameStatus::AwaitingMove(Color::Blue));
//! ```

use tracing::{debug, info};

use crate::board::{initial_board, Board, Color, Pos};
use crate::error::MoveError;
use crate::rules::{
    apply_move, classify, game_status, generate_moves, GameStatus, Move, RepetitionState,
};

/// Everything that changes with a move
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    to_move: Color,
    repetition: RepetitionState,
    status: GameStatus,
}

/// A single game from setup to result.
///
/// Once the status is terminal the session refuses further moves;
/// start a new session for a new game.
#[derive(Debug, Clone)]
pub struct Session {
    current: Snapshot,
    history: Vec<(Snapshot, Move)>,
}

impl Session {
    /// Standard game, Red to move
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(initial_board(), Color::Red)
    }

    /// Start from an arbitrary position. The status is derived right away,
    /// so a position that is already won or locked out starts terminal.
    #[must_use]
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let status = game_status(&board, to_move, None);
        info!(%to_move, ?status, "new session");
        Self {
            current: Snapshot {
                board,
                to_move,
                repetition: RepetitionState::default(),
                status,
            },
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.current.board
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.current.to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.current.status
    }

    #[inline]
    pub fn repetition(&self) -> &RepetitionState {
        &self.current.repetition
    }

    /// Moves played so far, oldest first, with the color that played them
    pub fn history(&self) -> impl Iterator<Item = (Color, Move)> + '_ {
        self.history.iter().map(|(snap, mv)| (snap.to_move, *mv))
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|(_, mv)| *mv)
    }

    /// Legal moves for the side to move; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.current.status.is_terminal() {
            return Vec::new();
        }
        generate_moves(&self.current.board, self.current.to_move)
    }

    /// Play the side to move's block from `from` to `to`.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` once the game has a winner and
    /// `MoveError::Illegal` when the step is not a legal move.
    pub fn play(&mut self, from: Pos, to: Pos) -> Result<GameStatus, MoveError> {
        if let GameStatus::Terminal { mode, winner } = self.current.status {
            return Err(MoveError::GameOver { winner, mode });
        }

        let color = self.current.to_move;
        let kind = classify(&self.current.board, color, from, to).ok_or(MoveError::Illegal {
            color,
            from,
            to,
        })?;
        let mv = Move::new(from, to, kind);

        let board = apply_move(&self.current.board, &mv);
        let update = self.current.repetition.update(color, &mv);
        let to_move = color.opponent();
        let status = game_status(&board, to_move, update.winner);

        debug!(%color, %mv, ?status, "move played");
        if let GameStatus::Terminal { mode, winner } = status {
            info!(%winner, mode = mode.describe(), moves = self.history.len() + 1, "game over");
        }

        let next = Snapshot {
            board,
            to_move,
            repetition: update.state,
            status,
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push((previous, mv));
        Ok(status)
    }

    /// Play a move produced by the move generator or the AI.
    ///
    /// # Errors
    ///
    /// Same as [`Session::play`].
    pub fn play_move(&mut self, mv: &Move) -> Result<GameStatus, MoveError> {
        self.play(mv.from, mv.to)
    }

    /// Take back the last move, restoring board, turn, trackers and status.
    ///
    /// # Errors
    ///
    /// `MoveError::NothingToUndo` at the start of the game.
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        let (previous, mv) = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.current = previous;
        debug!(%mv, "move undone");
        Ok(mv)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{MoveKind, WinMode};

    #[test]
    fn test_new_session_awaits_red() {
        let session = Session::new();
        assert_eq!(session.status(), GameStatus::AwaitingMove(Color::Red));
        assert_eq!(session.to_move(), Color::Red);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.legal_moves().len(), 80);
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut session = Session::new();
        let status = session.play(Pos::new(3, 0), Pos::new(3, 1)).unwrap();
        assert_eq!(status, GameStatus::AwaitingMove(Color::Blue));
        assert_eq!(session.board().height(Pos::new(3, 1)), 2);
        assert_eq!(session.board().block_count(), 64);

        let status = session.play(Pos::new(4, 7), Pos::new(4, 6)).unwrap();
        assert_eq!(status, GameStatus::AwaitingMove(Color::Red));
        let history: Vec<_> = session.history().map(|(c, _)| c).collect();
        assert_eq!(history, vec![Color::Red, Color::Blue]);
    }

    #[test]
    fn test_illegal_move_is_rejected_without_side_effects() {
        let mut session = Session::new();
        let err = session.play(Pos::new(3, 0), Pos::new(4, 0)).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal {
                color: Color::Red,
                from: Pos::new(3, 0),
                to: Pos::new(4, 0)
            }
        );
        // Blue's block, Red to move
        assert!(session.play(Pos::new(4, 0), Pos::new(4, 1)).is_err());
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.board(), &initial_board());
    }

    #[test]
    fn test_off_board_destination_reports_cleanly() {
        let mut session = Session::new();
        let off_board = Pos { row: 3, col: 200 };
        let err = session.play(Pos::new(3, 0), off_board).unwrap_err();
        assert_eq!(err.to_string(), "illegal move a4 -> (3,200) for Red");
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_crossing_ends_game() {
        let mut board = Board::new();
        board.set_stack(Pos::new(6, 3), &[Color::Red, Color::Red]);
        board.set_stack(Pos::new(2, 3), &[Color::Blue]);
        let mut session = Session::from_position(board, Color::Red);

        let status = session.play(Pos::new(6, 3), Pos::new(7, 3)).unwrap();
        assert_eq!(
            status,
            GameStatus::Terminal {
                mode: WinMode::Crossing,
                winner: Color::Red
            }
        );
        assert!(session.legal_moves().is_empty());
        assert_eq!(
            session.play(Pos::new(2, 3), Pos::new(1, 3)),
            Err(MoveError::GameOver {
                winner: Color::Red,
                mode: WinMode::Crossing
            })
        );
    }

    #[test]
    fn test_lockout_after_move() {
        // Blue steps down onto the last open square next to Red's stack
        let mut board = Board::new();
        board.push(Pos::new(3, 0), Color::Red);
        board.push(Pos::new(2, 0), Color::Blue);
        board.push(Pos::new(3, 1), Color::Blue);
        board.set_stack(Pos::new(5, 0), &[Color::Blue, Color::Blue]);
        board.push(Pos::new(4, 1), Color::Blue);
        let mut session = Session::from_position(board, Color::Blue);

        let status = session.play(Pos::new(5, 0), Pos::new(4, 0)).unwrap();
        assert_eq!(
            status,
            GameStatus::Terminal {
                mode: WinMode::Lockout,
                winner: Color::Blue
            }
        );
    }

    #[test]
    fn test_locked_out_position_starts_terminal() {
        let mut board = Board::new();
        board.push(Pos::new(3, 0), Color::Red);
        board.push(Pos::new(2, 0), Color::Blue);
        board.push(Pos::new(3, 1), Color::Blue);
        board.push(Pos::new(4, 0), Color::Blue);
        let session = Session::from_position(board, Color::Red);
        assert_eq!(session.status().winner(), Some(Color::Blue));
    }

    #[test]
    fn test_repetition_ends_game() {
        let mut session = Session::new();
        let red_a = (Pos::new(3, 0), Pos::new(3, 1));
        let red_b = (Pos::new(3, 1), Pos::new(3, 0));
        let blue_moves = [
            (Pos::new(4, 7), Pos::new(4, 6)),
            (Pos::new(4, 5), Pos::new(4, 4)),
            (Pos::new(4, 3), Pos::new(4, 2)),
        ];

        // Red bounces one block between a4 and b4 while Blue moves elsewhere.
        session.play(red_a.0, red_a.1).unwrap();
        session.play(blue_moves[0].0, blue_moves[0].1).unwrap();
        session.play(red_b.0, red_b.1).unwrap();
        session.play(blue_moves[1].0, blue_moves[1].1).unwrap();
        session.play(red_a.0, red_a.1).unwrap();
        session.play(blue_moves[2].0, blue_moves[2].1).unwrap();
        assert_eq!(session.repetition().red.count, 2);

        let status = session.play(red_b.0, red_b.1).unwrap();
        assert_eq!(
            status,
            GameStatus::Terminal {
                mode: WinMode::Repetition,
                winner: Color::Blue
            }
        );
    }

    #[test]
    fn test_undo_restores_everything() {
        let mut session = Session::new();
        let before = session.clone();
        let mv = session.legal_moves()[0];
        session.play_move(&mv).unwrap();
        assert_eq!(session.last_move(), Some(mv));

        assert_eq!(session.undo(), Ok(mv));
        assert_eq!(session.board(), before.board());
        assert_eq!(session.to_move(), before.to_move());
        assert_eq!(session.repetition(), before.repetition());
        assert_eq!(session.status(), before.status());
        assert_eq!(session.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn test_capture_through_session() {
        let mut board = Board::new();
        board.set_stack(Pos::new(3, 3), &[Color::Red, Color::Red, Color::Red]);
        board.set_stack(Pos::new(3, 4), &[Color::Blue, Color::Blue]);
        board.set_stack(Pos::new(5, 5), &[Color::Blue]);
        let mut session = Session::from_position(board, Color::Red);

        session.play(Pos::new(3, 3), Pos::new(3, 4)).unwrap();
        assert_eq!(session.last_move().map(|m| m.kind), Some(MoveKind::Capture));
        assert_eq!(
            session.board().stack(Pos::new(3, 4)),
            &[Color::Blue, Color::Blue, Color::Red]
        );
    }
}
