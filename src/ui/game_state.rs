//! Game state management for the Towers GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::board::Direction;
use crate::config::AiConfig;
use crate::rules::classify;
use crate::{Color, GameStatus, Move, MoveKind, MoveResult, Pos, Session};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::Red,
        }
    }
}

impl GameMode {
    pub fn from_human_color(human_color: Option<Color>) -> Self {
        human_color.map_or(GameMode::PvP, |human_color| GameMode::PvE { human_color })
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub session: Session,
    pub mode: GameMode,
    /// Source stack picked by the first click
    pub selected: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    ai: AiConfig,
}

impl GameState {
    pub fn new(mode: GameMode, ai: AiConfig) -> Self {
        Self {
            session: Session::new(),
            mode,
            selected: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            ai,
        }
    }

    pub fn reset(&mut self) {
        self.session = Session::new();
        self.selected = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.message = None;
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.session.to_move()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.session.status().is_terminal()
    }

    pub fn ai_config(&self) -> &AiConfig {
        &self.ai
    }

    /// Change the AI settings; takes effect on the next AI move
    pub fn set_ai_config(&mut self, ai: AiConfig) {
        self.ai = ai;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal destinations for the side to move's block on `from`
    pub fn legal_targets(&self, from: Pos) -> Vec<(Pos, MoveKind)> {
        if self.is_game_over() {
            return Vec::new();
        }
        let board = self.session.board();
        let color = self.current_turn();
        Direction::ALL
            .iter()
            .filter_map(|&dir| from.step(dir))
            .filter_map(|to| classify(board, color, from, to).map(|kind| (to, kind)))
            .collect()
    }

    /// Handle a click on `pos`: select a source stack, or move the
    /// selected block there.
    pub fn click(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let color = self.current_turn();
        if let Some(from) = self.selected {
            if from == pos {
                self.selected = None;
                return Ok(());
            }
            if classify(self.session.board(), color, from, pos).is_some() {
                self.selected = None;
                return self.execute_move(from, pos);
            }
        }

        if self.session.board().top(pos) == Some(color) {
            self.selected = Some(pos);
            Ok(())
        } else {
            self.selected = None;
            Err(format!("Pick one of {color}'s stacks"))
        }
    }

    /// Play a move for the side to move (human or AI)
    fn execute_move(&mut self, from: Pos, to: Pos) -> Result<(), String> {
        let status = self.session.play(from, to).map_err(|e| e.to_string())?;
        self.move_timer.stop();
        self.message = None;
        if let GameStatus::AwaitingMove(_) = status {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let board = self.session.board().clone();
        let color = self.current_turn();
        let mut ai = self.ai.clone();
        // Vary a fixed seed per ply so seeded games are reproducible
        // without repeating the same random draw every move
        ai.seed = ai
            .seed
            .map(|seed| seed.wrapping_add(self.session.move_count() as u64));

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = ai.build_engine();
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        debug!(%color, "AI thinking");
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI thread ended without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(mv) => {
                    if let Err(msg) = self.execute_move(mv.from, mv.to) {
                        self.message = Some(msg);
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    pub fn last_move(&self) -> Option<Move> {
        self.session.last_move()
    }

    /// Undo the last move; against the AI, undo back to the human's turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        if self.session.undo().is_err() {
            self.message = Some("Nothing to undo".to_string());
            return;
        }
        if self.is_ai_turn() && self.session.move_count() > 0 {
            let _ = self.session.undo();
        }

        self.selected = None;
        self.message = None;
        self.move_timer.start();
    }
}
